use crate::handlers::group::group_create::*;
use crate::handlers::group::group_dismiss::*;
use crate::handlers::group_member::group_member_admin::*;
use crate::handlers::group_member::group_member_info::*;
use crate::handlers::group_member::group_member_join::*;
use crate::handlers::group_member::group_member_mute::*;
use crate::handlers::group_member::group_member_quit::*;
use crate::handlers::seat::SeatTargetDto;
use crate::handlers::seat::seat_request::*;
use crate::handlers::seat::seat_review::*;
use crate::handlers::seat::seat_set::*;
use crate::handlers::seat::seat_view::*;
use crate::handlers::user_profile_handler::*;
use crate::result::ApiResponse;
use actix_web::{HttpResponse, get, web};
use biz_service::entitys::group_entity::GroupInfo;
use biz_service::entitys::group_member::{MemberRole, MembershipView};
use biz_service::entitys::seat_view::{SeatView, SeatedUser, TableSeat, WaitingUser};
use common::errors::AppError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        //群-管理
        group_create,
        group_dismiss,

        //群-成员-管理
        group_member_join,
        group_member_quit,
        group_member_info,
        group_member_mute,
        group_member_admin,

        //圆桌-座位
        seat_view,
        seat_request,
        seat_cancel,
        seat_set,
        seat_approve,
        seat_deny,
        seat_vacate,

        //用户-资料
        user_profile_sync,
    ),
    components(schemas(
        ApiResponse<String>,
        GroupInfo,
        MemberRole,
        MembershipView,
        SeatView,
        TableSeat,
        SeatedUser,
        WaitingUser,
        SeatTargetDto,
    )),
    tags(
        (name = "lang-table-api", description = "Language exchange table endpoints")
    )
)]
pub struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[get("/openapi.json")]
async fn openapi_json() -> Result<HttpResponse, AppError> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    Ok(HttpResponse::Ok().content_type("application/json").body(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_openapi_lists_seat_routes() {
        let app = test::init_service(App::new().configure(configure)).await;
        let body: serde_json::Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/openapi.json").to_request()).await;
        assert!(body["paths"]["/group/{group_id}/seat/approve"]["post"].is_object());
        assert!(body["paths"]["/group/{group_id}/seats"]["get"].is_object());
    }
}
