//! Badge Categories
//!
//! Admin sidebar sections that carry a pending-work badge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A badge category, keyed on the wire and in storage by its kebab-case name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Disabilities,
    Carers,
    CustomerSupport,
    Donations,
    RenewalDisabilities,
    RenewalCarers,
    RenewalCustomerSupport,
    Contact,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Disabilities,
        Category::Carers,
        Category::CustomerSupport,
        Category::Donations,
        Category::RenewalDisabilities,
        Category::RenewalCarers,
        Category::RenewalCustomerSupport,
        Category::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Disabilities => "disabilities",
            Category::Carers => "carers",
            Category::CustomerSupport => "customer-support",
            Category::Donations => "donations",
            Category::RenewalDisabilities => "renewal-disabilities",
            Category::RenewalCarers => "renewal-carers",
            Category::RenewalCustomerSupport => "renewal-customer-support",
            Category::Contact => "contact",
        }
    }

    /// Categories whose badge is cleared wholesale when their list page opens.
    ///
    /// Application categories are acknowledged one item at a time instead.
    pub fn is_clear_all(self) -> bool {
        matches!(
            self,
            Category::Donations
                | Category::Contact
                | Category::RenewalDisabilities
                | Category::RenewalCarers
                | Category::RenewalCustomerSupport
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| LedgerError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_key() {
        assert!("partners".parse::<Category>().is_err());
    }

    #[test]
    fn test_clear_all_split() {
        assert!(Category::Donations.is_clear_all());
        assert!(Category::RenewalCarers.is_clear_all());
        assert!(!Category::Carers.is_clear_all());
        assert!(!Category::Disabilities.is_clear_all());
    }
}
