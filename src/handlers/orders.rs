//! Order listing endpoint handler.

use crate::{
    middleware::auth::require_principal,
    models::{OrderPageResponse, PageQuery},
    services::OrderStore,
};
use actix_web::{Error, HttpRequest, Result, error::ErrorInternalServerError, web};
use paperclip::actix::api_v2_operation;

/// Paginated order listing for the authenticated account
///
/// The page window is clamped server-side: offsets are floored at zero and
/// the page size is capped at 50.
#[api_v2_operation(
    summary = "List Orders",
    description = "Returns a page of orders belonging to the authenticated account.",
    tags("Orders"),
    responses(
        (status = 200, description = "One page of orders", body = OrderPageResponse),
        (status = 401, description = "Unauthorized - authentication failed")
    )
)]
pub async fn list_orders(
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> Result<web::Json<OrderPageResponse>, Error> {
    let principal = require_principal(&req)?;

    let store = req
        .app_data::<web::Data<OrderStore>>()
        .ok_or_else(|| ErrorInternalServerError("order store not configured"))?;

    let orders = store.orders_for(principal.account_id);
    let first_result = query.first_result();
    let max_results = query.max_results();

    let page = orders
        .iter()
        .skip(first_result)
        .take(max_results)
        .cloned()
        .collect();

    Ok(web::Json(OrderPageResponse {
        first_result,
        max_results,
        total: orders.len(),
        orders: page,
    }))
}
