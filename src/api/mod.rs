pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::*;

use crate::service::ReceiptService;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

/// 构建路由
pub fn router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(receipt_points))
        .with_state(service)
        .layer(ServiceBuilder::new().layer(middleware::from_fn(log_request)))
}
