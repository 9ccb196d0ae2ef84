use crate::di::DependenciesInject;
use shared::config::ConnectionPool;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(db: ConnectionPool) -> Self {
        let di_container = DependenciesInject::new(db).await;

        Self { di_container }
    }
}
