use crate::handlers::auth_user::AuthUser;
use crate::handlers::seat::SeatTargetDto;
use crate::result::{ApiResponse, AppState, result, result_data};
use actix_web::{Responder, post, web};
use common::errors::AppError;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(seat_approve);
    cfg.service(seat_deny);
    cfg.service(seat_vacate);
}

/// 批准座位申请，返回入座的座位编号
#[utoipa::path(
    post,
    path = "/group/{group_id}/seat/approve",
    request_body = SeatTargetDto,
    summary = "批准座位申请",
    tag = "圆桌座位",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "群主或管理员 ID")
    ),
    responses(
        (status = 200, description = "批准成功", body = ApiResponse<u8>),
        (status = 403, description = "无权限"),
        (status = 409, description = "座位已被占用或成员未申请")
    )
)]
#[post("/group/{group_id}/seat/approve")]
async fn seat_approve(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser, dto: web::Json<SeatTargetDto>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    let seat = state.biz.seat_service.approve_request(&group_id, &user.user_id, &dto.user_id).await?;
    Ok(web::Json(result_data(seat.get())))
}

#[utoipa::path(
    post,
    path = "/group/{group_id}/seat/deny",
    request_body = SeatTargetDto,
    summary = "拒绝座位申请",
    tag = "圆桌座位",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "群主或管理员 ID")
    ),
    responses(
        (status = 200, description = "拒绝成功", body = ApiResponse<String>),
        (status = 403, description = "无权限")
    )
)]
#[post("/group/{group_id}/seat/deny")]
async fn seat_deny(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser, dto: web::Json<SeatTargetDto>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    state.biz.seat_service.deny_request(&group_id, &user.user_id, &dto.user_id).await?;
    Ok(web::Json(result()))
}

/// 请成员离开座位
#[utoipa::path(
    post,
    path = "/group/{group_id}/seat/vacate",
    request_body = SeatTargetDto,
    summary = "请离座位",
    tag = "圆桌座位",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "群主或管理员 ID")
    ),
    responses(
        (status = 200, description = "操作成功", body = ApiResponse<String>),
        (status = 403, description = "无权限"),
        (status = 409, description = "成员不在座位上")
    )
)]
#[post("/group/{group_id}/seat/vacate")]
async fn seat_vacate(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser, dto: web::Json<SeatTargetDto>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    state.biz.seat_service.vacate_seat(&group_id, &user.user_id, &dto.user_id).await?;
    Ok(web::Json(result()))
}
