use crate::handlers::auth_user::AuthUser;
use crate::result::{ApiResponse, AppState, result_data};
use actix_web::{Responder, post, web};
use biz_service::entitys::group_entity::GroupInfo;
use common::errors::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(group_create);
}

/// 创建语言圆桌群组的请求体
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupDto {
    /// 群组名称
    #[schema(example = "Spanish table")]
    #[validate(length(min = 1, max = 64, message = "group.name.length"))]
    pub name: String,
}

/// 创建群组，当前用户成为群主
#[utoipa::path(
    post,
    path = "/group/create",
    request_body = CreateGroupDto,
    summary = "创建群组",
    tag = "群组管理",
    params(("x-user-id" = String, Header, description = "当前用户 ID")),
    responses(
        (status = 200, description = "创建成功", body = ApiResponse<GroupInfo>),
        (status = 400, description = "参数错误"),
        (status = 401, description = "未认证")
    )
)]
#[post("/group/create")]
async fn group_create(state: web::Data<AppState>, user: AuthUser, dto: web::Json<CreateGroupDto>) -> Result<impl Responder, AppError> {
    dto.validate()?;
    let group = state.biz.group_service.create_group(&user.user_id, &dto.name).await?;
    Ok(web::Json(result_data(group)))
}
