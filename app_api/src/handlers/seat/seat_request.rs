use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result};
use actix_web::{Responder, post, web};
use common::errors::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(seat_request);
    cfg.service(seat_cancel);
}

/// 申请座位的请求体
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeatRequestDto {
    /// 座位编号 0..=9
    #[schema(example = 3)]
    #[validate(range(min = 0, max = 9, message = "seat.index.out.of.range"))]
    pub seat_index: i64,
}

/// 申请座位，覆盖之前的申请；不检查座位是否已被占用
#[utoipa::path(
    post,
    path = "/group/{group_id}/seat/request",
    request_body = SeatRequestDto,
    summary = "申请座位",
    tag = "圆桌座位",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "申请成功", body = ApiResponse<String>),
        (status = 400, description = "座位编号越界"),
        (status = 403, description = "非群成员")
    )
)]
#[post("/group/{group_id}/seat/request")]
async fn seat_request(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser, dto: web::Json<SeatRequestDto>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    state.biz.seat_service.request_seat(&group_id, &user.user_id, dto.seat_index).await?;
    Ok(web::Json(result()))
}

/// 撤回自己的座位申请
#[utoipa::path(
    post,
    path = "/group/{group_id}/seat/cancel",
    summary = "撤回座位申请",
    tag = "圆桌座位",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "撤回成功", body = ApiResponse<String>),
        (status = 409, description = "当前没有待处理的申请")
    )
)]
#[post("/group/{group_id}/seat/cancel")]
async fn seat_cancel(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser) -> Result<impl Responder, AppError> {
    state.biz.seat_service.cancel_request(&group_id, &user.user_id).await?;
    Ok(web::Json(result()))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{app_state, post, seed_group, test_app};
    use actix_web::test;
    use serde_json::json;

    #[actix_web::test]
    async fn test_cancel_request() {
        let state = app_state();
        let app = test_app!(state);
        let group_id = seed_group(&state, "alice", &["bob"]).await;
        let cancel = format!("/group/{}/seat/cancel", group_id);

        let resp = test::call_service(&app, post("bob", &cancel, json!({})).to_request()).await;
        assert_eq!(resp.status(), 409);

        state.biz.seat_service.request_seat(&group_id, "bob", 7).await.unwrap();
        let resp = test::call_service(&app, post("bob", &cancel, json!({})).to_request()).await;
        assert!(resp.status().is_success());
        let view = state.biz.seat_service.compute_seat_view(&group_id).await.unwrap();
        assert!(!view.waiting_user("bob").map(|u| u.has_requested).unwrap_or(true));
    }

    #[actix_web::test]
    async fn test_non_member_request_is_forbidden() {
        let state = app_state();
        let app = test_app!(state);
        let group_id = seed_group(&state, "alice", &[]).await;
        let resp = test::call_service(&app, post("mallory", &format!("/group/{}/seat/request", group_id), json!({"seatIndex": 1})).to_request()).await;
        assert_eq!(resp.status(), 403);
    }
}
