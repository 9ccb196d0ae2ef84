use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

/// Category tag of a budget record, stored as the `budget_type` enum in
/// Postgres.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "budget_type")]
pub enum BudgetType {
    Income,
    Expense,
}

impl fmt::Display for BudgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetType::Income => write!(f, "Income"),
            BudgetType::Expense => write!(f, "Expense"),
        }
    }
}

/// A persisted budget record. Immutable after insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BudgetModel {
    pub budget_id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    pub budget_type: BudgetType,
    pub author_id: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
}
