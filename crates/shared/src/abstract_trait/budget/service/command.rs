use crate::{
    domain::{
        requests::CreateBudgetRequest,
        responses::{ApiResponse, BudgetResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBudgetCommandService = Arc<dyn BudgetCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait BudgetCommandServiceTrait {
    async fn create_record(
        &self,
        request: &CreateBudgetRequest,
    ) -> Result<ApiResponse<BudgetResponse>, ServiceError>;
}
