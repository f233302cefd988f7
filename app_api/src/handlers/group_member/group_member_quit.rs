use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result};
use actix_web::{Responder, post, web};
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(group_member_quit);
}

/// 退出群组，同时释放座位或申请
#[utoipa::path(
    post,
    path = "/group/{group_id}/member/quit",
    summary = "退出群组",
    tag = "群成员管理",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "退出成功", body = ApiResponse<String>),
        (status = 403, description = "非群成员"),
        (status = 422, description = "群主不能退出")
    )
)]
#[post("/group/{group_id}/member/quit")]
async fn group_member_quit(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser) -> Result<impl Responder, AppError> {
    state.biz.group_member_service.quit(&group_id, &user.user_id).await?;
    Ok(web::Json(result()))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{app_state, post, seat_member, seed_group, test_app};
    use actix_web::test;
    use serde_json::json;

    #[actix_web::test]
    async fn test_quit_releases_seat() {
        let state = app_state();
        let app = test_app!(state);
        let group_id = seed_group(&state, "alice", &["bob"]).await;
        seat_member(&state, &group_id, "alice", "bob", 4).await;

        let resp = test::call_service(&app, post("bob", &format!("/group/{}/member/quit", group_id), json!({})).to_request()).await;
        assert!(resp.status().is_success());
        let view = state.biz.seat_service.compute_seat_view(&group_id).await.unwrap();
        assert!(view.seated_user(4).is_none());

        let resp = test::call_service(&app, post("alice", &format!("/group/{}/member/quit", group_id), json!({})).to_request()).await;
        assert_eq!(resp.status(), 422);
    }
}
