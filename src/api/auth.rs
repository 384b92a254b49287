//! Admin Session

use reqwest::Method;

use super::{ApiClient, ApiResult};
use crate::models::{LoginRequest, LoginResponse, Upload};

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest { email, password };
        Self::send_json(self.public(Method::POST, "/api/auth/login").json(&body)).await
    }

    /// Replace the signed-in admin's avatar
    pub async fn upload_profile_picture(&self, upload: Upload) -> ApiResult<serde_json::Value> {
        let form = reqwest::multipart::Form::new().part("profilePicture", super::file_part(upload)?);
        Self::send_json(self.admin(Method::POST, "/api/admin/profile/picture")?.multipart(form)).await
    }
}
