//! OpenAPI document and Swagger UI
//!
//! The UI is served at `/docs` and the raw document at `/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::routes::{companies, orders};
use crate::models::{Company, CompanyInput, Order, OrderInput};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order and Company APIs",
        description = "Create, read, update and delete company and order records"
    ),
    paths(
        companies::list_companies,
        companies::create_company,
        companies::get_company,
        companies::replace_company,
        companies::patch_company,
        companies::delete_company,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::replace_order,
        orders::patch_order,
        orders::delete_order,
    ),
    components(schemas(Company, CompanyInput, Order, OrderInput)),
    tags(
        (name = "company", description = "Company records"),
        (name = "order", description = "Order records"),
    )
)]
pub struct ApiDoc;

/// Swagger UI routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
}
