use crate::{
    domain::requests::CreateBudgetRequest, errors::RepositoryError, model::budget::BudgetModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBudgetCommandRepository = Arc<dyn BudgetCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait BudgetCommandRepositoryTrait {
    async fn create(&self, request: &CreateBudgetRequest) -> Result<BudgetModel, RepositoryError>;
}
