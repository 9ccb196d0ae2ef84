use crate::{
    domain::{
        requests::FindYearStats,
        responses::{ApiResponse, YearStatsResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBudgetStatsService = Arc<dyn BudgetStatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait BudgetStatsServiceTrait {
    async fn year_stats(
        &self,
        request: &FindYearStats,
    ) -> Result<ApiResponse<YearStatsResponse>, ServiceError>;
}
