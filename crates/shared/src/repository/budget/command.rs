use crate::{
    abstract_trait::budget::repository::command::BudgetCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateBudgetRequest, errors::RepositoryError,
    model::budget::BudgetModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct BudgetCommandRepository {
    db: ConnectionPool,
}

impl BudgetCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BudgetCommandRepositoryTrait for BudgetCommandRepository {
    async fn create(&self, request: &CreateBudgetRequest) -> Result<BudgetModel, RepositoryError> {
        info!(
            "💾 Inserting budget record | year={}, month={}, amount={}, type={}",
            request.year, request.month, request.amount, request.budget_type
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let budget = sqlx::query_as::<_, BudgetModel>(
            r#"
            INSERT INTO budgets (year, month, amount, budget_type, author_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING budget_id, year, month, amount, budget_type, author_id, created_at
            "#,
        )
        .bind(request.year)
        .bind(request.month)
        .bind(request.amount)
        .bind(request.budget_type)
        .bind(request.author_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert budget record: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Inserted budget record with id {}", budget.budget_id);

        Ok(budget)
    }
}
