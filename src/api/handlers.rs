use crate::api::ApiError;
use crate::models::{PointsResponse, ProcessReceiptResponse, Receipt};
use crate::service::ReceiptService;
use axum::{
    body::Bytes,
    extract::{Json, Path, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 提交收据，返回分配的ID
///
/// 请求体按 JSON 解析，忽略 Content-Type。
pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    body: Bytes,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let receipt = Receipt::from_json(&body).map_err(|e| ApiError::InvalidReceipt(e.to_string()))?;
    let id = service.process(receipt);
    Ok(Json(ProcessReceiptResponse { id }))
}

/// 按ID查询收据积分
pub async fn receipt_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = service.points(&id).ok_or(ApiError::NotFound(id))?;
    Ok(Json(PointsResponse { points }))
}

/// 请求日志
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;
    tracing::info!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
