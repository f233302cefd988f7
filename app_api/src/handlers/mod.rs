pub mod auth_user;
mod common_handler;
pub mod group;
pub mod group_member;
pub mod seat;
mod swagger;
mod user_profile_handler;

use actix_web::web;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    swagger::configure(cfg);
    common_handler::configure(cfg);
    group::configure(cfg);
    group_member::configure(cfg);
    seat::configure(cfg);
    user_profile_handler::configure(cfg);
}

/// 请求体解析失败时返回统一的 400 响应
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::handlers::auth_user::USER_ID_HEADER;
    use crate::result::AppState;
    use actix_web::{test, web};
    use biz_service::BizServices;
    use serde_json::Value;

    pub fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState::new(BizServices::local()))
    }

    /// 以内存存储初始化完整路由
    macro_rules! test_app {
        ($state:expr) => {
            actix_web::test::init_service(
                actix_web::App::new()
                    .app_data($state.clone())
                    .app_data($crate::handlers::json_config())
                    .configure($crate::handlers::configure),
            )
            .await
        };
    }
    pub(crate) use test_app;

    pub fn post(user: &str, path: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post().uri(path).insert_header((USER_ID_HEADER, user)).set_json(body)
    }

    pub fn get(user: &str, path: &str) -> test::TestRequest {
        test::TestRequest::get().uri(path).insert_header((USER_ID_HEADER, user))
    }

    /// 直接通过服务层建群并加入成员，返回群组 ID
    pub async fn seed_group(state: &web::Data<AppState>, owner: &str, members: &[&str]) -> String {
        let group = state.biz.group_service.create_group(owner, "Spanish table").await.unwrap();
        for member in members {
            state.biz.group_member_service.join(&group.id, member).await.unwrap();
        }
        group.id
    }

    /// 申请座位并由群主批准
    pub async fn seat_member(state: &web::Data<AppState>, group_id: &str, owner: &str, user: &str, index: i64) {
        state.biz.seat_service.request_seat(group_id, user, index).await.unwrap();
        state.biz.seat_service.approve_request(group_id, owner, user).await.unwrap();
    }
}
