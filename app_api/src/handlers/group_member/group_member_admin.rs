use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result};
use actix_web::{Responder, post, web};
use common::errors::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(group_member_admin);
}

/// 设置或取消管理员的请求体
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminMemberDto {
    /// 目标成员用户 ID
    #[validate(length(min = 1))]
    pub user_id: String,
    pub admin: bool,
}

/// 设置 / 取消管理员，仅群主可操作
#[utoipa::path(
    post,
    path = "/group/{group_id}/member/admin",
    request_body = AdminMemberDto,
    summary = "设置管理员",
    tag = "群成员管理",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "操作成功", body = ApiResponse<String>),
        (status = 403, description = "非群主")
    )
)]
#[post("/group/{group_id}/member/admin")]
async fn group_member_admin(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser, dto: web::Json<AdminMemberDto>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    state.biz.group_member_service.set_admin(&group_id, &user.user_id, &dto.user_id, dto.admin).await?;
    Ok(web::Json(result()))
}
