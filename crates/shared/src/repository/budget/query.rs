use crate::{
    abstract_trait::budget::repository::query::BudgetQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::budget::BudgetModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct BudgetQueryRepository {
    db: ConnectionPool,
}

impl BudgetQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BudgetQueryRepositoryTrait for BudgetQueryRepository {
    async fn find_by_year(&self, year: i32) -> Result<Vec<BudgetModel>, RepositoryError> {
        info!("🔍 Fetching full year set for {year}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let budgets = sqlx::query_as::<_, BudgetModel>(
            r#"
            SELECT budget_id, year, month, amount, budget_type, author_id, created_at
            FROM budgets
            WHERE year = $1
            "#,
        )
        .bind(year)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch budget records for {year}: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} budget records for {year}", budgets.len());

        Ok(budgets)
    }

    async fn find_page_by_year(
        &self,
        year: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BudgetModel>, RepositoryError> {
        info!("🔍 Fetching budget page | year={year}, limit={limit}, offset={offset}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        // budget_id keeps the page order total when month and amount tie.
        let budgets = sqlx::query_as::<_, BudgetModel>(
            r#"
            SELECT budget_id, year, month, amount, budget_type, author_id, created_at
            FROM budgets
            WHERE year = $1
            ORDER BY month ASC, amount DESC, budget_id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(year)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch budget page for {year}: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved page of {} budget records", budgets.len());

        Ok(budgets)
    }
}
