use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result};
use actix_web::{Responder, post, web};
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(group_dismiss);
}

/// 解散群组，仅群主可操作
#[utoipa::path(
    post,
    path = "/group/{group_id}/dismiss",
    summary = "解散群组",
    tag = "群组管理",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "解散成功", body = ApiResponse<String>),
        (status = 403, description = "非群主"),
        (status = 404, description = "群组不存在")
    )
)]
#[post("/group/{group_id}/dismiss")]
async fn group_dismiss(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser) -> Result<impl Responder, AppError> {
    state.biz.group_service.dismiss_group(&user.user_id, &group_id).await?;
    Ok(web::Json(result()))
}
