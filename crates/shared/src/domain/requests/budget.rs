use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::budget::BudgetType;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBudgetRequest {
    #[validate(range(min = 1900, message = "Year must be 1900 or later"))]
    pub year: i32,

    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: i32,

    #[validate(range(min = 1, message = "Amount must be at least 1"))]
    pub amount: i32,

    #[serde(rename = "type")]
    pub budget_type: BudgetType,

    #[serde(rename = "authorId")]
    pub author_id: Option<i32>,
}

/// Query-string half of the year stats request; the year itself arrives as
/// a path segment.
#[derive(Debug, Deserialize, IntoParams)]
pub struct YearStatsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,

    #[serde(default)]
    pub offset: i64,

    #[serde(rename = "authorFIO")]
    pub author_fio: Option<String>,
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Clone)]
pub struct FindYearStats {
    pub year: i32,
    pub limit: i64,
    pub offset: i64,
    pub author_fio: Option<String>,
}

impl FindYearStats {
    pub fn new(year: i32, query: YearStatsQuery) -> Self {
        Self {
            year,
            limit: query.limit,
            offset: query.offset,
            author_fio: query.author_fio,
        }
    }
}
