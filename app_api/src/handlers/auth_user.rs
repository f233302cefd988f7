use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use common::errors::AppError;
use futures_util::future::{Ready, ready};

/// 认证网关写入的当前用户头
pub const USER_ID_HEADER: &str = "x-user-id";

/// 已认证的当前用户
///
/// 身份由上游认证服务校验，本服务只读取网关透传的用户 ID。
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req.headers().get(USER_ID_HEADER).and_then(|v| v.to_str().ok()).map(str::trim).filter(|v| !v.is_empty());
        ready(match user_id {
            Some(user_id) => Ok(AuthUser { user_id: user_id.to_string() }),
            None => Err(AppError::Unauthorized(format!("missing {} header", USER_ID_HEADER))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_trimmed_user_id() {
        let req = TestRequest::default().insert_header((USER_ID_HEADER, " u1 ")).to_http_request();
        let user = AuthUser::extract(&req).await.unwrap();
        assert_eq!(user.user_id, "u1");
    }

    #[actix_web::test]
    async fn test_missing_or_blank_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(AuthUser::extract(&req).await, Err(AppError::Unauthorized(_))));

        let req = TestRequest::default().insert_header((USER_ID_HEADER, "  ")).to_http_request();
        assert!(matches!(AuthUser::extract(&req).await, Err(AppError::Unauthorized(_))));
    }
}
