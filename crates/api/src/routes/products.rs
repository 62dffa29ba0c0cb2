use axum::routing::{get, post};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes, mounted at `/products`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create_product))
        .route(
            "/{id}",
            get(products::get_product).put(products::update_product),
        )
}
