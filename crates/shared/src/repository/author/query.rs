use crate::{
    abstract_trait::author::repository::query::AuthorQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::author::AuthorModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct AuthorQueryRepository {
    db: ConnectionPool,
}

impl AuthorQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorQueryRepositoryTrait for AuthorQueryRepository {
    async fn find_by_id(&self, author_id: i32) -> Result<Option<AuthorModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let author = sqlx::query_as::<_, AuthorModel>(
            r#"
            SELECT author_id, fio, created_at
            FROM authors
            WHERE author_id = $1
            "#,
        )
        .bind(author_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to look up author {author_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(author)
    }
}
