//! Contact Submissions

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiResult, ListQuery};
use crate::models::{ContactStatus, ContactSubmission, NewContact, Page};

#[derive(Serialize)]
struct StatusArgs {
    status: ContactStatus,
}

impl ApiClient {
    pub async fn list_contact_submissions(&self, query: &ListQuery) -> ApiResult<Page<ContactSubmission>> {
        let path = format!("/api/contact{}", query.to_query_string());
        Self::send_json(self.admin(Method::GET, &path)?).await
    }

    pub async fn submit_contact(&self, contact: &NewContact) -> ApiResult<ContactSubmission> {
        Self::send_json(self.public(Method::POST, "/api/contact").json(contact)).await
    }

    pub async fn update_contact_status(&self, id: u64, status: ContactStatus) -> ApiResult<ContactSubmission> {
        let path = format!("/api/contact/{}/status", id);
        Self::send_json(self.admin(Method::PATCH, &path)?.json(&StatusArgs { status })).await
    }

    pub async fn delete_contact_submission(&self, id: u64) -> ApiResult<()> {
        let path = format!("/api/contact/{}", id);
        Self::send_empty(self.admin(Method::DELETE, &path)?).await
    }
}
