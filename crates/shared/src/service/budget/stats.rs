use std::collections::BTreeMap;

use crate::{
    abstract_trait::{
        author::repository::query::DynAuthorQueryRepository,
        budget::{
            repository::query::DynBudgetQueryRepository, service::stats::BudgetStatsServiceTrait,
        },
    },
    domain::{
        requests::FindYearStats,
        responses::{ApiResponse, BudgetWithAuthorResponse, YearStatsResponse},
    },
    errors::ServiceError,
    model::budget::BudgetModel,
};
use async_trait::async_trait;
use tracing::{debug, error, info};

pub struct BudgetStatsService {
    query: DynBudgetQueryRepository,
    authors: DynAuthorQueryRepository,
}

impl BudgetStatsService {
    pub async fn new(query: DynBudgetQueryRepository, authors: DynAuthorQueryRepository) -> Self {
        Self { query, authors }
    }

    async fn enrich(&self, budget: BudgetModel) -> Result<BudgetWithAuthorResponse, ServiceError> {
        let Some(author_id) = budget.author_id else {
            return Ok(BudgetWithAuthorResponse::from(budget));
        };

        let author = self.authors.find_by_id(author_id).await.map_err(|e| {
            error!("❌ Author lookup failed for id {author_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        match author {
            Some(author) => Ok(BudgetWithAuthorResponse::with_author(budget, &author)),
            None => {
                debug!("Author {author_id} not found, keeping record without author data");
                Ok(BudgetWithAuthorResponse::from(budget))
            }
        }
    }
}

#[async_trait]
impl BudgetStatsServiceTrait for BudgetStatsService {
    async fn year_stats(
        &self,
        request: &FindYearStats,
    ) -> Result<ApiResponse<YearStatsResponse>, ServiceError> {
        let limit = request.limit.max(0);
        let offset = request.offset.max(0);

        info!(
            "📊 Computing year stats | year={}, limit={limit}, offset={offset}, author={:?}",
            request.year, request.author_fio
        );

        // First pass: the complete year set. Totals come from here and must
        // not reflect pagination or the author filter.
        let year_set = self.query.find_by_year(request.year).await.map_err(|e| {
            error!("❌ Failed to fetch year set for {}: {e:?}", request.year);
            ServiceError::Repo(e)
        })?;

        let total = year_set.len() as i64;

        let mut total_by_type: BTreeMap<String, i64> = BTreeMap::new();
        for budget in &year_set {
            *total_by_type.entry(budget.budget_type.to_string()).or_insert(0) +=
                i64::from(budget.amount);
        }

        // Second pass: the sorted page.
        let page = self
            .query
            .find_page_by_year(request.year, limit, offset)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch page for year {}: {e:?}", request.year);
                ServiceError::Repo(e)
            })?;

        let mut items = Vec::with_capacity(page.len());
        for budget in page {
            items.push(self.enrich(budget).await?);
        }

        // The author filter runs after the page is cut, so a filtered page
        // may hold fewer than `limit` rows even when more year rows exist.
        if let Some(author_fio) = &request.author_fio {
            let needle = author_fio.to_lowercase();
            items.retain(|item| {
                item.author_fio
                    .as_ref()
                    .is_some_and(|fio| fio.to_lowercase().contains(&needle))
            });
        }

        info!("✅ Year stats ready | total={total}, items={}", items.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Year stats retrieved successfully".to_string(),
            data: YearStatsResponse {
                total,
                total_by_type,
                items,
            },
        })
    }
}
