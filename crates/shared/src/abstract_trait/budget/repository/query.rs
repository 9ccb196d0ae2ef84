use crate::{errors::RepositoryError, model::budget::BudgetModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBudgetQueryRepository = Arc<dyn BudgetQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait BudgetQueryRepositoryTrait {
    /// Every record of the given year, in storage order. Basis for totals.
    async fn find_by_year(&self, year: i32) -> Result<Vec<BudgetModel>, RepositoryError>;

    /// One page of the given year, ordered by month ascending, then amount
    /// descending, then id ascending.
    async fn find_page_by_year(
        &self,
        year: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BudgetModel>, RepositoryError>;
}
