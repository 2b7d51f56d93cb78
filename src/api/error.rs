use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// 接口错误
///
/// 响应体只返回状态码的标准文本，具体原因仅写入日志。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求体无法解析为收据
    #[error("invalid receipt: {0}")]
    InvalidReceipt(String),

    /// 收据ID不存在
    #[error("no receipt found for id {0}")]
    NotFound(String),
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidReceipt(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!("Request failed ({}): {}", status.as_u16(), self);
        let body = status.canonical_reason().unwrap_or_default();
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::InvalidReceipt("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_error_response_hides_details() {
        let response = ApiError::InvalidReceipt("expected value at line 1".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Bad Request");

        let response = ApiError::NotFound("abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not Found");
    }
}
