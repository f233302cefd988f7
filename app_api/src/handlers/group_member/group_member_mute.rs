use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result};
use actix_web::{Responder, post, web};
use common::errors::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(group_member_mute);
}

/// 禁言或取消禁言的请求体
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MuteMemberDto {
    /// 目标成员用户 ID
    #[validate(length(min = 1))]
    pub user_id: String,
    /// true 禁言，false 取消禁言
    pub mute: bool,
}

/// 禁言 / 取消禁言，仅群主或管理员可操作
#[utoipa::path(
    post,
    path = "/group/{group_id}/member/mute",
    request_body = MuteMemberDto,
    summary = "禁言群成员",
    tag = "群成员管理",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "操作成功", body = ApiResponse<String>),
        (status = 403, description = "无权限或非群成员"),
        (status = 422, description = "群主不能被禁言")
    )
)]
#[post("/group/{group_id}/member/mute")]
async fn group_member_mute(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser, dto: web::Json<MuteMemberDto>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    state.biz.group_member_service.set_muted(&group_id, &user.user_id, &dto.user_id, dto.mute).await?;
    Ok(web::Json(result()))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{app_state, post, seed_group, test_app};
    use actix_web::test;
    use serde_json::json;

    #[actix_web::test]
    async fn test_mute_member() {
        let state = app_state();
        let app = test_app!(state);
        let group_id = seed_group(&state, "alice", &["bob", "carol"]).await;
        let path = format!("/group/{}/member/mute", group_id);

        let resp = test::call_service(&app, post("carol", &path, json!({"userId": "bob", "mute": true})).to_request()).await;
        assert_eq!(resp.status(), 403);
        let resp = test::call_service(&app, post("alice", &path, json!({"userId": "bob", "mute": true})).to_request()).await;
        assert!(resp.status().is_success());

        let member = state.biz.group_member_service.find_member(&group_id, "bob").await.unwrap();
        assert!(member.is_muted);
    }
}
