use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An author row. Authors are referenced by budget records but never
/// mutated from this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthorModel {
    pub author_id: i32,
    pub fio: String,
    pub created_at: NaiveDateTime,
}
