use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result};
use actix_web::{Responder, post, web};
use common::errors::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(seat_set);
}

/// 入座 / 离座的请求体，`seatIndex` 为空表示离座
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeatSetDto {
    #[schema(example = 3)]
    #[validate(range(min = 0, max = 9, message = "seat.index.out.of.range"))]
    pub seat_index: Option<i64>,
}

/// 入座或离座。直接入座仅限群主或管理员，普通成员须先申请并经批准；离座不限
#[utoipa::path(
    post,
    path = "/group/{group_id}/seat/set",
    request_body = SeatSetDto,
    summary = "入座或离座",
    tag = "圆桌座位",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "操作成功", body = ApiResponse<String>),
        (status = 403, description = "未经批准不能入座"),
        (status = 409, description = "座位已被占用")
    )
)]
#[post("/group/{group_id}/seat/set")]
async fn seat_set(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser, dto: web::Json<SeatSetDto>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    state.biz.seat_service.set_seat(&group_id, &user.user_id, dto.seat_index).await?;
    Ok(web::Json(result()))
}
