use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result_data};
use actix_web::{Responder, get, web};
use biz_service::entitys::seat_view::SeatView;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(seat_view);
}

/// 圆桌视图：10 个座位及等待列表（按加入时间升序）
#[utoipa::path(
    get,
    path = "/group/{group_id}/seats",
    summary = "查看圆桌座位",
    tag = "圆桌座位",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "圆桌视图", body = ApiResponse<SeatView>),
        (status = 404, description = "群组不存在")
    )
)]
#[get("/group/{group_id}/seats")]
async fn seat_view(state: web::Data<AppState>, group_id: web::Path<String>, _user: AuthUser) -> Result<impl Responder, AppError> {
    let view = state.biz.seat_service.compute_seat_view(&group_id).await?;
    Ok(web::Json(result_data(view)))
}
