use shared::{
    abstract_trait::{
        author::repository::query::DynAuthorQueryRepository,
        budget::{
            repository::{command::DynBudgetCommandRepository, query::DynBudgetQueryRepository},
            service::{command::DynBudgetCommandService, stats::DynBudgetStatsService},
        },
    },
    config::ConnectionPool,
    repository::{
        author::query::AuthorQueryRepository,
        budget::{command::BudgetCommandRepository, query::BudgetQueryRepository},
    },
    service::budget::{command::BudgetCommandService, stats::BudgetStatsService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub budget_command: DynBudgetCommandService,
    pub budget_stats: DynBudgetStatsService,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool) -> Self {
        let command_repo =
            Arc::new(BudgetCommandRepository::new(db.clone())) as DynBudgetCommandRepository;
        let query_repo =
            Arc::new(BudgetQueryRepository::new(db.clone())) as DynBudgetQueryRepository;
        let author_repo = Arc::new(AuthorQueryRepository::new(db)) as DynAuthorQueryRepository;

        let budget_command =
            Arc::new(BudgetCommandService::new(command_repo).await) as DynBudgetCommandService;
        let budget_stats = Arc::new(BudgetStatsService::new(query_repo, author_repo).await)
            as DynBudgetStatsService;

        Self {
            budget_command,
            budget_stats,
        }
    }
}
