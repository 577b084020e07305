//! Company endpoints
//!
//! `GET /companies` lists; everything else addresses `/company[/{id}]`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::db::CompanyStore;
use crate::http::error::ApiError;
use crate::http::extractors::{CompanyId, JsonBody};
use crate::http::server::AppState;
use crate::models::{Company, CompanyInput};

/// GET /companies - every company
#[utoipa::path(
    get,
    path = "/companies",
    tag = "company",
    responses((status = 200, description = "Every company", body = [Company]))
)]
pub async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = state.store.list_companies().await?;
    Ok(Json(companies))
}

/// POST /company - create with a generated id
#[utoipa::path(
    post,
    path = "/company",
    tag = "company",
    request_body = CompanyInput,
    responses(
        (status = 201, description = "Company created", body = Company),
        (status = 400, description = "Body is not valid JSON"),
        (status = 409, description = "Generated id already taken"),
    )
)]
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<CompanyInput>,
) -> Result<(StatusCode, Json<Company>), ApiError> {
    tracing::debug!(?input, "create company");

    let company = Company::new(state.ids.next_company_id(), input.defaulted());
    let company = state.store.create_company(company).await?;

    tracing::info!(company_id = %company.company_id, "company created");
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /company/{id}
#[utoipa::path(
    get,
    path = "/company/{id}",
    tag = "company",
    params(("id" = String, Path, description = "Company id")),
    responses(
        (status = 200, description = "The company", body = Company),
        (status = 404, description = "No company with this id"),
    )
)]
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    CompanyId(id): CompanyId,
) -> Result<Json<Company>, ApiError> {
    let company = state.store.get_company(&id).await?;
    Ok(Json(company))
}

/// PUT /company/{id} - overwrite every field, undefined ones become ""
#[utoipa::path(
    put,
    path = "/company/{id}",
    tag = "company",
    params(("id" = String, Path, description = "Company id")),
    request_body = CompanyInput,
    responses(
        (status = 200, description = "Company replaced", body = Company),
        (status = 400, description = "Body is not valid JSON"),
        (status = 404, description = "No company with this id"),
    )
)]
pub async fn replace_company(
    State(state): State<Arc<AppState>>,
    CompanyId(id): CompanyId,
    JsonBody(input): JsonBody<CompanyInput>,
) -> Result<Json<Company>, ApiError> {
    tracing::debug!(company_id = %id, ?input, "replace company");

    let company = state.store.replace_company(&id, input.defaulted()).await?;

    tracing::info!(company_id = %id, "company replaced");
    Ok(Json(company))
}

/// PATCH /company/{id} - overwrite only the fields present
#[utoipa::path(
    patch,
    path = "/company/{id}",
    tag = "company",
    params(("id" = String, Path, description = "Company id")),
    request_body = CompanyInput,
    responses(
        (status = 200, description = "Company updated", body = Company),
        (status = 400, description = "Body is not valid JSON"),
        (status = 404, description = "No company with this id"),
    )
)]
pub async fn patch_company(
    State(state): State<Arc<AppState>>,
    CompanyId(id): CompanyId,
    JsonBody(input): JsonBody<CompanyInput>,
) -> Result<Json<Company>, ApiError> {
    tracing::debug!(company_id = %id, ?input, "patch company");

    if input.is_empty() {
        tracing::debug!(company_id = %id, "patch names no fields");
        return Ok(Json(state.store.get_company(&id).await?));
    }

    let company = state.store.patch_company(&id, input).await?;

    tracing::info!(company_id = %id, "company patched");
    Ok(Json(company))
}

/// DELETE /company/{id}
#[utoipa::path(
    delete,
    path = "/company/{id}",
    tag = "company",
    params(("id" = String, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company deleted"),
        (status = 404, description = "No company with this id"),
    )
)]
pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    CompanyId(id): CompanyId,
) -> Result<Json<Value>, ApiError> {
    state.store.delete_company(&id).await?;

    tracing::info!(company_id = %id, "company deleted");
    Ok(Json(json!({ "deleted": true })))
}

/// Company routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", get(list_companies))
        .route("/company", post(create_company))
        .route(
            "/company/{id}",
            get(get_company)
                .put(replace_company)
                .patch(patch_company)
                .delete(delete_company),
        )
}
