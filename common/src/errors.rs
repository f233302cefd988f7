use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use mongodb::bson::ser::Error as BsonError;
use mongodb::error::Error as MongoError;
use serde::Serialize;
use std::io;
use thiserror::Error;
/// HTTP 错误响应结构
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    message: String,
}

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    // ==== 常规业务错误 ====
    #[error("Resource not found")]
    NotFound,

    #[error("Not a member of the group")]
    NotAMember,

    #[error("Bad request: {0}")]
    Validation(String),

    #[error("Unauthorized access: {0}")]
    Unauthorized(String),

    #[error("Forbidden access")]
    Forbidden,

    #[error("Seat {0} is already occupied")]
    SeatOccupied(u8),

    #[error("Invalid seat transition: {0}")]
    InvalidTransition(String),

    #[error("Group is inactive")]
    GroupInactive,

    #[error("Conflict: resource already exists")]
    Conflict,

    #[error("biz error: {0}")]
    BizError(String),

    // ==== 系统错误 ====
    #[error("MongoDB error: {0}")]
    Mongo(#[from] MongoError),
    #[error("BSON error: {0}")]
    Bson(#[from] BsonError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Internal server error")]
    Internal(String),
}
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("参数验证失败: {}", e))
    }
}
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotAMember | AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::SeatOccupied(_) | AppError::InvalidTransition(_) | AppError::GroupInactive | AppError::Conflict => StatusCode::CONFLICT,
            AppError::BizError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let msg = match self {
            AppError::Unauthorized(msg) => msg.to_string(),
            AppError::BizError(code) => code.to_string(),
            AppError::Mongo(e) => {
                error!("{:?}", e);
                "Service error".to_string()
            }
            AppError::Bson(e) => {
                error!("{:?}", e);
                "Service error".to_string()
            }
            AppError::Json(e) => {
                error!("{:?}", e);
                "Service error".to_string()
            }
            AppError::Io(e) => {
                error!("{:?}", e);
                "Service error".to_string()
            }
            AppError::Internal(e) => {
                error!("{:?}", e);
                "Service error".to_string()
            }
            e => e.to_string(),
        };

        HttpResponse::build(status).json(ErrorResponse { code: status.as_u16(), message: msg })
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotAMember.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::SeatOccupied(5).status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::Validation("seat".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Internal("boom".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_message_hidden() {
        let resp = AppError::Internal("secret detail".into()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
