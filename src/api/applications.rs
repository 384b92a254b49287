//! Card Applications
//!
//! Admin listing/detail/status per card type, plus the public submission.

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiResult, ListQuery};
use crate::models::{Application, ApplicationStatus, CardType, NewApplication, Page};

#[derive(Serialize)]
struct StatusArgs {
    status: ApplicationStatus,
}

impl ApiClient {
    pub async fn list_applications(&self, card_type: CardType, query: &ListQuery) -> ApiResult<Page<Application>> {
        let path = format!("/api/admin/applications/{}{}", card_type.slug(), query.to_query_string());
        Self::send_json(self.admin(Method::GET, &path)?).await
    }

    pub async fn get_application(&self, card_type: CardType, id: u64) -> ApiResult<Application> {
        let path = format!("/api/admin/applications/{}/{}", card_type.slug(), id);
        Self::send_json(self.admin(Method::GET, &path)?).await
    }

    pub async fn update_application_status(
        &self,
        card_type: CardType,
        id: u64,
        status: ApplicationStatus,
    ) -> ApiResult<Application> {
        let path = format!("/api/admin/applications/{}/{}/status", card_type.slug(), id);
        Self::send_json(self.admin(Method::PATCH, &path)?.json(&StatusArgs { status })).await
    }

    pub async fn delete_application(&self, card_type: CardType, id: u64) -> ApiResult<()> {
        let path = format!("/api/admin/applications/{}/{}", card_type.slug(), id);
        Self::send_empty(self.admin(Method::DELETE, &path)?).await
    }

    /// Public form submission; no token required
    pub async fn submit_application(&self, card_type: CardType, application: &NewApplication) -> ApiResult<Application> {
        let path = format!("/api/applications/{}", card_type.slug());
        Self::send_json(self.public(Method::POST, &path).json(application)).await
    }
}
