use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::author::AuthorModel;
use crate::model::budget::{BudgetModel, BudgetType};
use crate::utils::format_author_created_at;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetResponse {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    #[serde(rename = "authorId", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i32>,
}

impl From<BudgetModel> for BudgetResponse {
    fn from(model: BudgetModel) -> Self {
        Self {
            id: model.budget_id,
            year: model.year,
            month: model.month,
            amount: model.amount,
            budget_type: model.budget_type,
            author_id: model.author_id,
        }
    }
}

/// A budget record enriched with author display data. Author fields are
/// omitted from the JSON entirely when no author resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetWithAuthorResponse {
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    #[serde(rename = "authorFIO", skip_serializing_if = "Option::is_none")]
    pub author_fio: Option<String>,
    #[serde(rename = "authorCreated", skip_serializing_if = "Option::is_none")]
    pub author_created: Option<String>,
}

impl From<BudgetModel> for BudgetWithAuthorResponse {
    fn from(model: BudgetModel) -> Self {
        Self {
            year: model.year,
            month: model.month,
            amount: model.amount,
            budget_type: model.budget_type,
            author_fio: None,
            author_created: None,
        }
    }
}

impl BudgetWithAuthorResponse {
    pub fn with_author(model: BudgetModel, author: &AuthorModel) -> Self {
        Self {
            year: model.year,
            month: model.month,
            amount: model.amount,
            budget_type: model.budget_type,
            author_fio: Some(author.fio.clone()),
            author_created: Some(format_author_created_at(&author.created_at)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct YearStatsResponse {
    pub total: i64,
    #[serde(rename = "totalByType")]
    pub total_by_type: BTreeMap<String, i64>,
    pub items: Vec<BudgetWithAuthorResponse>,
}
