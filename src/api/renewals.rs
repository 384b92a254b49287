//! Card Renewals

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiResult, ListQuery};
use crate::models::{CardType, NewRenewal, Page, Renewal, RenewalStatus};

#[derive(Serialize)]
struct StatusArgs {
    status: RenewalStatus,
}

impl ApiClient {
    pub async fn list_renewals(&self, card_type: CardType, query: &ListQuery) -> ApiResult<Page<Renewal>> {
        let path = format!("/api/renewals/{}{}", card_type.slug(), query.to_query_string());
        Self::send_json(self.admin(Method::GET, &path)?).await
    }

    pub async fn submit_renewal(&self, card_type: CardType, renewal: &NewRenewal) -> ApiResult<Renewal> {
        let path = format!("/api/renewals/{}", card_type.slug());
        Self::send_json(self.public(Method::POST, &path).json(renewal)).await
    }

    pub async fn update_renewal_status(&self, card_type: CardType, id: u64, status: RenewalStatus) -> ApiResult<Renewal> {
        let path = format!("/api/renewals/{}/{}/status", card_type.slug(), id);
        Self::send_json(self.admin(Method::PATCH, &path)?.json(&StatusArgs { status })).await
    }

    pub async fn delete_renewal(&self, card_type: CardType, id: u64) -> ApiResult<()> {
        let path = format!("/api/renewals/{}/{}", card_type.slug(), id);
        Self::send_empty(self.admin(Method::DELETE, &path)?).await
    }
}
