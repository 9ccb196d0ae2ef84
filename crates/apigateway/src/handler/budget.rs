use crate::state::AppState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::budget::service::{
        command::DynBudgetCommandService, stats::DynBudgetStatsService,
    },
    domain::{
        requests::{CreateBudgetRequest, FindYearStats, YearStatsQuery},
        responses::{ApiResponse, BudgetResponse, YearStatsResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/budget/add",
    tag = "Budget",
    request_body = CreateBudgetRequest,
    responses(
        (status = 201, description = "Budget record created", body = ApiResponse<BudgetResponse>),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_budget_record(
    Extension(service): Extension<DynBudgetCommandService>,
    Json(body): Json<CreateBudgetRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create_record(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/budget/year/{year}/stats",
    tag = "Budget",
    params(
        ("year" = i32, Path, description = "Budget year"),
        YearStatsQuery
    ),
    responses(
        (status = 200, description = "Year statistics", body = ApiResponse<YearStatsResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_year_stats(
    Extension(service): Extension<DynBudgetStatsService>,
    Path(year): Path<i32>,
    Query(params): Query<YearStatsQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let request = FindYearStats::new(year, params);
    let response = service.year_stats(&request).await?;
    Ok(Json(response))
}

pub fn budget_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/budget/add", post(add_budget_record))
        .route("/api/budget/year/{year}/stats", get(get_year_stats))
        .layer(Extension(app_state.di_container.budget_command.clone()))
        .layer(Extension(app_state.di_container.budget_stats.clone()))
}
