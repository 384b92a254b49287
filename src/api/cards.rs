//! Issued Cards

use reqwest::Method;

use super::{ApiClient, ApiError, ApiResult};
use crate::models::{Card, CardInput};

impl ApiClient {
    pub async fn create_card(&self, input: &CardInput) -> ApiResult<Card> {
        Self::send_json(self.admin(Method::POST, "/api/cards")?.json(input)).await
    }

    pub async fn update_card(&self, id: u64, input: &CardInput) -> ApiResult<Card> {
        let path = format!("/api/cards/{}", id);
        Self::send_json(self.admin(Method::PUT, &path)?.json(input)).await
    }

    /// Card issued for an application, if any. A 404 means none yet.
    pub async fn card_for_application(&self, application_id: u64) -> ApiResult<Option<Card>> {
        let path = format!("/api/cards/application/{}", application_id);
        match Self::send_json(self.admin(Method::GET, &path)?).await {
            Ok(card) => Ok(Some(card)),
            Err(ApiError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
