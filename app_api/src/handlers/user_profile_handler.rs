use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result};
use actix_web::{Responder, post, web};
use biz_service::entitys::user_entity::UserProfile;
use common::errors::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(user_profile_sync);
}

/// 同步当前用户资料的请求体
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    #[schema(example = "maria")]
    #[validate(length(min = 1, max = 32, message = "user.name.length"))]
    pub username: String,
    #[validate(email)]
    pub email: Option<String>,
    /// 国籍
    pub nationality: Option<String>,
    /// 母语
    pub native_language: Option<String>,
    /// 目标语言
    pub target_language: Option<String>,
}

/// 同步当前用户资料，圆桌视图中的用户名与语言信息取自此处
#[utoipa::path(
    post,
    path = "/user/profile",
    request_body = UserProfileDto,
    summary = "同步用户资料",
    tag = "用户资料",
    params(("x-user-id" = String, Header, description = "当前用户 ID")),
    responses(
        (status = 200, description = "同步成功", body = ApiResponse<String>),
        (status = 400, description = "参数错误")
    )
)]
#[post("/user/profile")]
async fn user_profile_sync(state: web::Data<AppState>, user: AuthUser, dto: web::Json<UserProfileDto>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    let dto = dto.into_inner();
    let profile = UserProfile {
        id: user.user_id,
        username: dto.username,
        email: dto.email,
        nationality: dto.nationality,
        native_language: dto.native_language,
        target_language: dto.target_language,
    };
    state.biz.store.save_profile(profile).await?;
    Ok(web::Json(result()))
}
