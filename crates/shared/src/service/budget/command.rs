use crate::{
    abstract_trait::budget::{
        repository::command::DynBudgetCommandRepository, service::command::BudgetCommandServiceTrait,
    },
    domain::{
        requests::CreateBudgetRequest,
        responses::{ApiResponse, BudgetResponse},
    },
    errors::{ServiceError, format_validation_errors},
};
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct BudgetCommandService {
    command: DynBudgetCommandRepository,
}

impl BudgetCommandService {
    pub async fn new(command: DynBudgetCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl BudgetCommandServiceTrait for BudgetCommandService {
    async fn create_record(
        &self,
        request: &CreateBudgetRequest,
    ) -> Result<ApiResponse<BudgetResponse>, ServiceError> {
        request.validate().map_err(|e| {
            error!("❌ Budget record rejected: {e:?}");
            ServiceError::Validation(format_validation_errors(&e))
        })?;

        info!(
            "💾 Creating budget record | year={}, month={}, amount={}, type={}",
            request.year, request.month, request.amount, request.budget_type
        );

        let budget = self.command.create(request).await.map_err(|e| {
            error!("❌ Failed to create budget record: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Budget record {} created", budget.budget_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Budget record created successfully".to_string(),
            data: BudgetResponse::from(budget),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::budget::repository::command::BudgetCommandRepositoryTrait;
    use crate::errors::RepositoryError;
    use crate::model::budget::{BudgetModel, BudgetType};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, Ordering};

    struct InMemoryBudgetCommandRepository {
        next_id: AtomicI32,
    }

    impl InMemoryBudgetCommandRepository {
        fn new() -> Self {
            Self {
                next_id: AtomicI32::new(1),
            }
        }
    }

    #[async_trait]
    impl BudgetCommandRepositoryTrait for InMemoryBudgetCommandRepository {
        async fn create(
            &self,
            request: &CreateBudgetRequest,
        ) -> Result<BudgetModel, RepositoryError> {
            Ok(BudgetModel {
                budget_id: self.next_id.fetch_add(1, Ordering::SeqCst),
                year: request.year,
                month: request.month,
                amount: request.amount,
                budget_type: request.budget_type,
                author_id: request.author_id,
                created_at: None,
            })
        }
    }

    struct FailingBudgetCommandRepository;

    #[async_trait]
    impl BudgetCommandRepositoryTrait for FailingBudgetCommandRepository {
        async fn create(&self, _: &CreateBudgetRequest) -> Result<BudgetModel, RepositoryError> {
            Err(RepositoryError::Custom("connection refused".to_string()))
        }
    }

    async fn service() -> BudgetCommandService {
        BudgetCommandService::new(Arc::new(InMemoryBudgetCommandRepository::new())).await
    }

    fn request(year: i32, month: i32, amount: i32) -> CreateBudgetRequest {
        CreateBudgetRequest {
            year,
            month,
            amount,
            budget_type: BudgetType::Income,
            author_id: None,
        }
    }

    #[tokio::test]
    async fn creates_record_and_echoes_assigned_id() {
        let response = service()
            .await
            .create_record(&CreateBudgetRequest {
                author_id: Some(7),
                ..request(2020, 3, 100)
            })
            .await
            .unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.id, 1);
        assert_eq!(response.data.year, 2020);
        assert_eq!(response.data.month, 3);
        assert_eq!(response.data.amount, 100);
        assert_eq!(response.data.author_id, Some(7));
    }

    #[tokio::test]
    async fn rejects_year_before_1900() {
        let err = service().await.create_record(&request(1899, 3, 100)).await;

        match err {
            Err(ServiceError::Validation(msg)) => assert!(msg.contains("year")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejects_month_out_of_range() {
        let err = service().await.create_record(&request(2020, 13, 100)).await;

        match err {
            Err(ServiceError::Validation(msg)) => assert!(msg.contains("month")),
            other => panic!("expected validation error, got {other:?}"),
        }

        let err = service().await.create_record(&request(2020, 0, 100)).await;
        assert!(matches!(err, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_amount_below_one() {
        let err = service().await.create_record(&request(2020, 3, 0)).await;

        match err {
            Err(ServiceError::Validation(msg)) => assert!(msg.contains("amount")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let service = BudgetCommandService::new(Arc::new(FailingBudgetCommandRepository)).await;

        let err = service.create_record(&request(2020, 3, 100)).await;

        assert!(matches!(err, Err(ServiceError::Repo(_))));
    }
}
