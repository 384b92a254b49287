//! Application Form Drafts
//!
//! In-memory state of the public wizards and the per-step rules that gate
//! the Next button.

use chrono::NaiveDate;

use crate::models::NewApplication;
use crate::validation::{self, FieldErrors};

// ========================
// General card application
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStep {
    Personal,
    Address,
    Details,
    Review,
}

impl ApplyStep {
    pub const ORDER: &'static [ApplyStep] =
        &[ApplyStep::Personal, ApplyStep::Address, ApplyStep::Details, ApplyStep::Review];

    pub fn title(self) -> &'static str {
        match self {
            ApplyStep::Personal => "About you",
            ApplyStep::Address => "Address",
            ApplyStep::Details => "Your circumstances",
            ApplyStep::Review => "Review & submit",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub postcode: String,
    pub details: String,
    pub consent: bool,
}

impl ApplicationDraft {
    pub fn validate(&self, step: ApplyStep, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        match step {
            ApplyStep::Personal => {
                errors.check("first_name", validation::required(&self.first_name, "First name"));
                errors.check("last_name", validation::required(&self.last_name, "Last name"));
                errors.check("email", validation::email(&self.email));
                errors.check("phone", validation::phone(&self.phone));
                errors.check("date_of_birth", validation::date_of_birth(&self.date_of_birth, today));
            }
            ApplyStep::Address => {
                errors.check("address_line1", validation::required(&self.address_line1, "Address"));
                errors.check("city", validation::required(&self.city, "Town or city"));
                errors.check("postcode", validation::postcode(&self.postcode));
            }
            ApplyStep::Details => {
                errors.check("details", validation::min_len(&self.details, "Description", 20));
            }
            ApplyStep::Review => {
                errors.check("consent", validation::consent(self.consent));
            }
        }
        errors.into_result()
    }

    /// Every step at once; used right before submitting
    pub fn validate_all(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        ApplyStep::ORDER.iter().try_for_each(|step| self.validate(*step, today))
    }

    pub fn to_submission(&self) -> NewApplication {
        let line2 = self.address_line2.trim();
        NewApplication {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            address_line1: self.address_line1.trim().to_string(),
            address_line2: (!line2.is_empty()).then(|| line2.to_string()),
            city: self.city.trim().to_string(),
            postcode: self.postcode.trim().to_uppercase(),
            details: self.details.trim().to_string(),
            consent: self.consent,
        }
    }
}

// ========================
// Verified lanyard
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanyardStep {
    Personal,
    Address,
    Lanyard,
    Review,
}

impl LanyardStep {
    pub const ORDER: &'static [LanyardStep] =
        &[LanyardStep::Personal, LanyardStep::Address, LanyardStep::Lanyard, LanyardStep::Review];

    pub fn title(self) -> &'static str {
        match self {
            LanyardStep::Personal => "Card holder",
            LanyardStep::Address => "Delivery address",
            LanyardStep::Lanyard => "Lanyard",
            LanyardStep::Review => "Review & confirm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanyardStyle {
    #[default]
    Standard,
    Breakaway,
}

impl LanyardStyle {
    pub const ALL: [LanyardStyle; 2] = [LanyardStyle::Standard, LanyardStyle::Breakaway];

    pub fn label(self) -> &'static str {
        match self {
            LanyardStyle::Standard => "Standard",
            LanyardStyle::Breakaway => "Breakaway (safety clasp)",
        }
    }

    /// `<option value>` for the style select
    pub fn value(self) -> &'static str {
        match self {
            LanyardStyle::Standard => "standard",
            LanyardStyle::Breakaway => "breakaway",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.value() == value)
    }
}

pub const MAX_LANYARDS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct LanyardDraft {
    pub full_name: String,
    pub email: String,
    pub card_number: String,
    pub address_line1: String,
    pub city: String,
    pub postcode: String,
    pub style: LanyardStyle,
    pub quantity: u32,
    pub consent: bool,
}

impl Default for LanyardDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            card_number: String::new(),
            address_line1: String::new(),
            city: String::new(),
            postcode: String::new(),
            style: LanyardStyle::default(),
            quantity: 1,
            consent: false,
        }
    }
}

/// Card numbers are 8-16 letters/digits; spaces are ignored
fn card_number(value: &str) -> Result<(), String> {
    validation::required(value, "Card number")?;
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if (8..=16).contains(&compact.len()) && compact.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err("Enter the number printed on your card".to_string())
    }
}

impl LanyardDraft {
    pub fn validate(&self, step: LanyardStep) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        match step {
            LanyardStep::Personal => {
                errors.check("full_name", validation::required(&self.full_name, "Full name"));
                errors.check("email", validation::email(&self.email));
                errors.check("card_number", card_number(&self.card_number));
            }
            LanyardStep::Address => {
                errors.check("address_line1", validation::required(&self.address_line1, "Address"));
                errors.check("city", validation::required(&self.city, "Town or city"));
                errors.check("postcode", validation::postcode(&self.postcode));
            }
            LanyardStep::Lanyard => {
                if !(1..=MAX_LANYARDS).contains(&self.quantity) {
                    errors.check("quantity", Err(format!("Choose between 1 and {} lanyards", MAX_LANYARDS)));
                }
            }
            LanyardStep::Review => {
                errors.check("consent", validation::consent(self.consent));
            }
        }
        errors.into_result()
    }
}

/// Reference shown after the simulated lanyard order, e.g. `LAN-00KF12AB`
pub fn lanyard_reference(millis: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut n = millis;
    let mut out = [b'0'; 8];
    for slot in out.iter_mut().rev() {
        *slot = DIGITS[(n % 36) as usize];
        n /= 36;
    }
    format!("LAN-{}", String::from_utf8_lossy(&out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn complete_draft() -> ApplicationDraft {
        ApplicationDraft {
            first_name: "Ann".into(),
            last_name: " Lee ".into(),
            email: "ann@example.org".into(),
            phone: "0113 496 0000".into(),
            date_of_birth: "1990-04-01".into(),
            address_line1: "1 High Street".into(),
            address_line2: "  ".into(),
            city: "Leeds".into(),
            postcode: "ls1 4ap".into(),
            details: "I use a wheelchair and need step-free access.".into(),
            consent: true,
        }
    }

    #[test]
    fn test_personal_step_reports_each_field() {
        let draft = ApplicationDraft::default();
        let errors = draft.validate(ApplyStep::Personal, today()).unwrap_err();
        for field in ["first_name", "last_name", "email", "phone", "date_of_birth"] {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
        // Address errors are not reported on the personal step
        assert!(errors.get("postcode").is_none());
    }

    #[test]
    fn test_complete_draft_passes_all_steps() {
        assert!(complete_draft().validate_all(today()).is_ok());
    }

    #[test]
    fn test_review_requires_consent() {
        let draft = ApplicationDraft { consent: false, ..complete_draft() };
        let errors = draft.validate(ApplyStep::Review, today()).unwrap_err();
        assert!(errors.get("consent").is_some());
    }

    #[test]
    fn test_submission_is_trimmed() {
        let submission = complete_draft().to_submission();
        assert_eq!(submission.last_name, "Lee");
        assert_eq!(submission.postcode, "LS1 4AP");
        assert!(submission.address_line2.is_none());

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["firstName"], "Ann");
        assert!(json.get("addressLine2").is_none());
    }

    #[test]
    fn test_lanyard_steps() {
        let mut draft = LanyardDraft {
            full_name: "Sam Patel".into(),
            email: "sam@example.org".into(),
            card_number: "DC12 3456 78".into(),
            ..LanyardDraft::default()
        };
        assert!(draft.validate(LanyardStep::Personal).is_ok());

        draft.card_number = "12-34".into();
        assert!(draft.validate(LanyardStep::Personal).is_err());

        draft.quantity = 0;
        assert!(draft.validate(LanyardStep::Lanyard).is_err());
        draft.quantity = MAX_LANYARDS;
        assert!(draft.validate(LanyardStep::Lanyard).is_ok());
        draft.quantity = MAX_LANYARDS + 1;
        assert!(draft.validate(LanyardStep::Lanyard).is_err());
    }

    #[test]
    fn test_lanyard_style_values() {
        for style in LanyardStyle::ALL {
            assert_eq!(LanyardStyle::from_value(style.value()), Some(style));
        }
        assert_eq!(LanyardStyle::from_value("gold"), None);
    }

    #[test]
    fn test_lanyard_reference() {
        assert_eq!(lanyard_reference(0), "LAN-00000000");
        assert_eq!(lanyard_reference(35), "LAN-0000000Z");
        assert_eq!(lanyard_reference(36), "LAN-00000010");
        assert_eq!(lanyard_reference(1_760_000_000_000).len(), 12);
    }
}
