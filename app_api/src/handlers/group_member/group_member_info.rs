use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result_data};
use actix_web::{Responder, get, web};
use biz_service::entitys::group_member::MembershipView;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(group_member_info);
}

#[utoipa::path(
    get,
    path = "/group/{group_id}/member/{user_id}",
    summary = "查询群成员",
    tag = "群成员管理",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("user_id" = String, Path, description = "成员用户 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "成员信息", body = ApiResponse<MembershipView>),
        (status = 403, description = "非群成员"),
        (status = 404, description = "群组不存在")
    )
)]
#[get("/group/{group_id}/member/{user_id}")]
async fn group_member_info(state: web::Data<AppState>, path: web::Path<(String, String)>, _user: AuthUser) -> Result<impl Responder, AppError> {
    let (group_id, user_id) = path.into_inner();
    let member = state.biz.group_member_service.find_member(&group_id, &user_id).await?;
    Ok(web::Json(result_data(MembershipView::from(&member))))
}
