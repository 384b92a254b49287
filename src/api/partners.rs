//! Partner Directory
//!
//! Listing and categories are public; writes are admin-only and go out as
//! multipart so a logo can ride along.

use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

use super::{file_part, ApiClient, ApiResult, ListQuery};
use crate::models::{Page, Partner, PartnerCategory, PartnerInput, Upload};

#[derive(Serialize)]
struct CategoryArgs<'a> {
    name: &'a str,
}

fn partner_form(input: &PartnerInput, logo: Option<Upload>) -> ApiResult<Form> {
    let mut form = Form::new()
        .text("name", input.name.clone())
        .text("description", input.description.clone())
        .text("website", input.website.clone())
        .text("discount", input.discount.clone());
    if let Some(category_id) = input.category_id {
        form = form.text("categoryId", category_id.to_string());
    }
    if let Some(logo) = logo {
        form = form.part("logo", file_part(logo)?);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn list_partners(&self, query: &ListQuery) -> ApiResult<Page<Partner>> {
        let path = format!("/api/partners{}", query.to_query_string());
        Self::send_json(self.public(Method::GET, &path)).await
    }

    pub async fn get_partner(&self, id: u64) -> ApiResult<Partner> {
        let path = format!("/api/partners/{}", id);
        Self::send_json(self.public(Method::GET, &path)).await
    }

    pub async fn create_partner(&self, input: &PartnerInput, logo: Option<Upload>) -> ApiResult<Partner> {
        let form = partner_form(input, logo)?;
        Self::send_json(self.admin(Method::POST, "/api/partners")?.multipart(form)).await
    }

    pub async fn update_partner(&self, id: u64, input: &PartnerInput, logo: Option<Upload>) -> ApiResult<Partner> {
        let path = format!("/api/partners/{}", id);
        let form = partner_form(input, logo)?;
        Self::send_json(self.admin(Method::PUT, &path)?.multipart(form)).await
    }

    pub async fn delete_partner(&self, id: u64) -> ApiResult<()> {
        let path = format!("/api/partners/{}", id);
        Self::send_empty(self.admin(Method::DELETE, &path)?).await
    }

    pub async fn list_partner_categories(&self) -> ApiResult<Vec<PartnerCategory>> {
        Self::send_json(self.public(Method::GET, "/api/partners/categories")).await
    }

    pub async fn create_partner_category(&self, name: &str) -> ApiResult<PartnerCategory> {
        let body = CategoryArgs { name };
        Self::send_json(self.admin(Method::POST, "/api/partners/categories")?.json(&body)).await
    }

    pub async fn delete_partner_category(&self, id: u64) -> ApiResult<()> {
        let path = format!("/api/partners/categories/{}", id);
        Self::send_empty(self.admin(Method::DELETE, &path)?).await
    }
}
