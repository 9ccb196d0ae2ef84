use crate::{errors::RepositoryError, model::author::AuthorModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthorQueryRepository = Arc<dyn AuthorQueryRepositoryTrait + Send + Sync>;

/// Read-only author lookup. An id that resolves to no author is a normal
/// `None`, not an error.
#[async_trait]
pub trait AuthorQueryRepositoryTrait {
    async fn find_by_id(&self, author_id: i32) -> Result<Option<AuthorModel>, RepositoryError>;
}
