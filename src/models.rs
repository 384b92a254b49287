//! Frontend Models
//!
//! Data structures matching the REST backend's JSON (camelCase on the wire).

use std::collections::BTreeMap;

use badge_ledger::{Category, RawCounts};
use serde::{Deserialize, Serialize};

/// The three card programmes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    Disability,
    Carers,
    CustomerSupport,
}

impl CardType {
    pub const ALL: [CardType; 3] = [CardType::Disability, CardType::Carers, CardType::CustomerSupport];

    /// Path segment used by the applications and renewals endpoints
    pub fn slug(self) -> &'static str {
        match self {
            CardType::Disability => "disability",
            CardType::Carers => "carers",
            CardType::CustomerSupport => "customer-support",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardType::Disability => "Disability Card",
            CardType::Carers => "Carers Card",
            CardType::CustomerSupport => "Customer Support Card",
        }
    }

    pub fn application_badge(self) -> Category {
        match self {
            CardType::Disability => Category::Disabilities,
            CardType::Carers => Category::Carers,
            CardType::CustomerSupport => Category::CustomerSupport,
        }
    }

    pub fn renewal_badge(self) -> Category {
        match self {
            CardType::Disability => Category::RenewalDisabilities,
            CardType::Carers => Category::RenewalCarers,
            CardType::CustomerSupport => Category::RenewalCustomerSupport,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 3] =
        [ApplicationStatus::Pending, ApplicationStatus::Approved, ApplicationStatus::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// Card application as listed in the admin tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub postcode: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Application {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Public application submission
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub postcode: String,
    pub details: String,
    pub consent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerCategory {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Text fields of a partner create/update; the logo travels as a file part
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerInput {
    pub name: String,
    pub category_id: Option<u64>,
    pub description: String,
    pub website: String,
    pub discount: String,
}

/// Image file picked in the browser, read into memory for upload
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: u64,
    pub donor_name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Minor currency units
    pub amount: u64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub donor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonationStats {
    pub total_amount: u64,
    pub count: u64,
    pub this_month_amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    #[default]
    New,
    InProgress,
    Resolved,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 3] = [ContactStatus::New, ContactStatus::InProgress, ContactStatus::Resolved];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::InProgress => "in-progress",
            ContactStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenewalStatus {
    #[default]
    Pending,
    Processed,
    Rejected,
}

impl RenewalStatus {
    pub const ALL: [RenewalStatus; 3] = [RenewalStatus::Pending, RenewalStatus::Processed, RenewalStatus::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            RenewalStatus::Pending => "pending",
            RenewalStatus::Processed => "processed",
            RenewalStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Renewal {
    pub id: u64,
    pub card_number: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub status: RenewalStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRenewal {
    pub card_number: String,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u64,
    pub application_id: u64,
    pub card_type: CardType,
    pub card_number: String,
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInput {
    pub application_id: u64,
    pub card_type: CardType,
    pub card_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// One page of a server-side paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0, page: 1, limit: 10 }
    }
}

/// Aggregated admin dashboard snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    /// Pending items keyed by badge category
    pub pending: BTreeMap<String, u32>,
    pub total_applications: u64,
    pub total_partners: u64,
    pub total_donations: u64,
}

impl DashboardStats {
    /// Pending counts for known badge categories; unknown keys are skipped
    pub fn raw_counts(&self) -> RawCounts {
        self.pending
            .iter()
            .filter_map(|(key, count)| match key.parse::<Category>() {
                Ok(category) => Some((category, *count)),
                Err(_) => {
                    log::debug!("[stats] Ignoring unknown pending key {}", key);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_math() {
        let page: Page<u32> = Page { items: vec![], total: 21, page: 3, limit: 10 };
        assert_eq!(page.total_pages(), 3);

        let empty: Page<u32> = Page::default();
        assert_eq!(empty.total_pages(), 1);
    }

    #[test]
    fn test_dashboard_stats_to_raw_counts() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"pending":{"carers":4,"renewal-carers":1,"partners":9},"totalApplications":120}"#,
        )
        .unwrap();
        let raw = stats.raw_counts();
        assert_eq!(raw.get(&Category::Carers), Some(&4));
        assert_eq!(raw.get(&Category::RenewalCarers), Some(&1));
        assert_eq!(raw.len(), 2);
        assert_eq!(stats.total_applications, 120);
    }

    #[test]
    fn test_application_wire_format() {
        let json = r#"{
            "id": 7, "firstName": "Ann", "lastName": "Lee", "email": "ann@example.org",
            "phone": "0123 456789", "dateOfBirth": "1990-04-01", "addressLine1": "1 High St",
            "city": "Leeds", "postcode": "LS1 1AA", "status": "approved"
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.full_name(), "Ann Lee");
        assert_eq!(app.status, ApplicationStatus::Approved);
        assert!(app.address_line2.is_none());
    }

    #[test]
    fn test_card_type_badges() {
        assert_eq!(CardType::Carers.application_badge(), Category::Carers);
        assert_eq!(CardType::Disability.renewal_badge(), Category::RenewalDisabilities);
        assert_eq!(CardType::CustomerSupport.slug(), "customer-support");
    }
}
