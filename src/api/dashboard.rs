//! Dashboard Stats
//!
//! The aggregated snapshot also feeds the sidebar badges.

use async_trait::async_trait;
use badge_ledger::{RawCounts, StatsSource};
use reqwest::Method;

use super::{ApiClient, ApiError, ApiResult};
use crate::models::DashboardStats;

impl ApiClient {
    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        Self::send_json(self.admin(Method::GET, "/api/admin/dashboard/stats")?).await
    }
}

#[async_trait(?Send)]
impl StatsSource for ApiClient {
    type Error = ApiError;

    async fn pending_counts(&self) -> ApiResult<RawCounts> {
        Ok(self.dashboard_stats().await?.raw_counts())
    }
}
