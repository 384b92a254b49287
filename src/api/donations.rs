//! Donations

use reqwest::Method;

use super::{ApiClient, ApiResult, ListQuery};
use crate::models::{Donation, DonationStats, NewDonation, Page};

impl ApiClient {
    pub async fn list_donations(&self, query: &ListQuery) -> ApiResult<Page<Donation>> {
        let path = format!("/api/donations{}", query.to_query_string());
        Self::send_json(self.admin(Method::GET, &path)?).await
    }

    pub async fn get_donation(&self, id: u64) -> ApiResult<Donation> {
        let path = format!("/api/donations/{}", id);
        Self::send_json(self.admin(Method::GET, &path)?).await
    }

    /// Record a donation taken outside the site (cheque, event collection)
    pub async fn create_donation(&self, donation: &NewDonation) -> ApiResult<Donation> {
        Self::send_json(self.admin(Method::POST, "/api/donations")?.json(donation)).await
    }

    pub async fn delete_donation(&self, id: u64) -> ApiResult<()> {
        let path = format!("/api/donations/{}", id);
        Self::send_empty(self.admin(Method::DELETE, &path)?).await
    }

    pub async fn donation_stats(&self) -> ApiResult<DonationStats> {
        Self::send_json(self.admin(Method::GET, "/api/donations/stats")?).await
    }
}
