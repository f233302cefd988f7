use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result_data};
use actix_web::{Responder, post, web};
use biz_service::entitys::group_member::MembershipView;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(group_member_join);
}

/// 加入群组接口（防重复加入）
///
/// 默认角色为 `listener`，已是成员时返回原记录
#[utoipa::path(
    post,
    path = "/group/{group_id}/member/join",
    summary = "加入群组",
    tag = "群成员管理",
    params(
        ("group_id" = String, Path, description = "群组 ID"),
        ("x-user-id" = String, Header, description = "当前用户 ID")
    ),
    responses(
        (status = 200, description = "加入成功", body = ApiResponse<MembershipView>),
        (status = 404, description = "群组不存在"),
        (status = 409, description = "群组已解散")
    )
)]
#[post("/group/{group_id}/member/join")]
async fn group_member_join(state: web::Data<AppState>, group_id: web::Path<String>, user: AuthUser) -> Result<impl Responder, AppError> {
    let member = state.biz.group_member_service.join(&group_id, &user.user_id).await?;
    Ok(web::Json(result_data(MembershipView::from(&member))))
}
