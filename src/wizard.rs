//! Linear Form Wizard
//!
//! An ordered list of steps and a cursor. Moving forward requires the
//! current step to validate; moving back never does. No skipping.

use crate::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard<S: 'static> {
    steps: &'static [S],
    current: usize,
}

impl<S: Copy + PartialEq + 'static> Wizard<S> {
    /// Panics on an empty step list; every form has at least one step.
    pub fn new(steps: &'static [S]) -> Self {
        assert!(!steps.is_empty(), "wizard needs at least one step");
        Self { steps, current: 0 }
    }

    pub fn current(&self) -> S {
        self.steps[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &'static [S] {
        self.steps
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn is_done(&self, step: S) -> bool {
        self.steps.iter().position(|s| *s == step).is_some_and(|i| i < self.current)
    }

    /// Advance if `validate` accepts the current step.
    ///
    /// On the last step this only validates; submitting is the caller's job.
    pub fn next(&mut self, validate: impl FnOnce(S) -> Result<(), FieldErrors>) -> Result<S, FieldErrors> {
        validate(self.current())?;
        if !self.is_last() {
            self.current += 1;
        }
        Ok(self.current())
    }

    pub fn back(&mut self) -> S {
        self.current = self.current.saturating_sub(1);
        self.current()
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Step {
        One,
        Two,
        Three,
    }

    const STEPS: &[Step] = &[Step::One, Step::Two, Step::Three];

    fn ok(_: Step) -> Result<(), FieldErrors> {
        Ok(())
    }

    fn failing(_: Step) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", Err("Name is required".to_string()));
        errors.into_result()
    }

    #[test]
    fn test_walks_forward_and_back() {
        let mut wizard = Wizard::new(STEPS);
        assert!(wizard.is_first());
        assert_eq!(wizard.next(ok).unwrap(), Step::Two);
        assert_eq!(wizard.next(ok).unwrap(), Step::Three);
        assert!(wizard.is_last());
        assert_eq!((wizard.index(), wizard.len()), (2, 3));
        assert!(wizard.is_done(Step::One));
        assert!(!wizard.is_done(Step::Three));

        assert_eq!(wizard.back(), Step::Two);
        assert_eq!(wizard.back(), Step::One);
        assert_eq!(wizard.back(), Step::One);
    }

    #[test]
    fn test_invalid_step_blocks_next() {
        let mut wizard = Wizard::new(STEPS);
        let errors = wizard.next(failing).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(wizard.current(), Step::One);
    }

    #[test]
    fn test_next_on_last_step_stays() {
        let mut wizard = Wizard::new(STEPS);
        wizard.next(ok).unwrap();
        wizard.next(ok).unwrap();
        assert_eq!(wizard.next(ok).unwrap(), Step::Three);
        assert_eq!(wizard.index(), 2);

        wizard.reset();
        assert_eq!(wizard.current(), Step::One);
    }

    #[test]
    fn test_validator_sees_current_step() {
        let mut wizard = Wizard::new(STEPS);
        wizard.next(ok).unwrap();
        let mut seen = None;
        wizard
            .next(|step| {
                seen = Some(step);
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, Some(Step::Two));
    }
}
