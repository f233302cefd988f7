pub mod seat_request;
pub mod seat_review;
pub mod seat_set;
pub mod seat_view;

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    seat_view::configure(cfg);
    seat_request::configure(cfg);
    seat_set::configure(cfg);
    seat_review::configure(cfg);
}

/// 群主或管理员针对某个成员的座位操作请求体
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeatTargetDto {
    /// 目标成员用户 ID
    #[schema(example = "user_123")]
    #[validate(length(min = 1))]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{app_state, get, post, seed_group, test_app};
    use actix_web::test;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_request_approve_flow() {
        let state = app_state();
        let app = test_app!(state);
        let group_id = seed_group(&state, "alice", &["bob", "carol"]).await;

        let resp = test::call_service(&app, post("bob", &format!("/group/{}/seat/request", group_id), json!({"seatIndex": 5})).to_request()).await;
        assert!(resp.status().is_success());

        let view: Value = test::call_and_read_body_json(&app, get("carol", &format!("/group/{}/seats", group_id)).to_request()).await;
        let bob = view["data"]["waitingUsers"].as_array().unwrap().iter().find(|u| u["id"] == "bob").cloned().unwrap();
        assert_eq!(bob["hasRequested"], true);
        assert_eq!(bob["requestedSeatPosition"], 5);

        let body: Value = test::call_and_read_body_json(&app, post("alice", &format!("/group/{}/seat/approve", group_id), json!({"userId": "bob"})).to_request()).await;
        assert_eq!(body["data"], 5);

        let view: Value = test::call_and_read_body_json(&app, get("carol", &format!("/group/{}/seats", group_id)).to_request()).await;
        assert_eq!(view["data"]["tableSeats"][5]["user"]["id"], "bob");
        assert_eq!(view["data"]["tableSeats"][5]["user"]["role"], "speaker");
        assert_eq!(view["data"]["tableSeats"].as_array().unwrap().len(), 10);
    }

    #[actix_web::test]
    async fn test_second_approval_for_same_seat_conflicts() {
        let state = app_state();
        let app = test_app!(state);
        let group_id = seed_group(&state, "alice", &["bob", "carol"]).await;
        state.biz.seat_service.request_seat(&group_id, "bob", 3).await.unwrap();
        state.biz.seat_service.request_seat(&group_id, "carol", 3).await.unwrap();

        let path = format!("/group/{}/seat/approve", group_id);
        let resp = test::call_service(&app, post("alice", &path, json!({"userId": "bob"})).to_request()).await;
        assert!(resp.status().is_success());
        let resp = test::call_service(&app, post("alice", &path, json!({"userId": "carol"})).to_request()).await;
        assert_eq!(resp.status(), 409);

        let view = state.biz.seat_service.compute_seat_view(&group_id).await.unwrap();
        assert_eq!(view.seated_user(3).map(|u| u.id.as_str()), Some("bob"));
        assert_eq!(view.waiting_user("carol").and_then(|u| u.requested_seat_position), Some(3));
    }

    #[actix_web::test]
    async fn test_out_of_range_seat_is_bad_request() {
        let state = app_state();
        let app = test_app!(state);
        let group_id = seed_group(&state, "alice", &["bob"]).await;

        for index in [-1, 10] {
            let resp = test::call_service(&app, post("bob", &format!("/group/{}/seat/request", group_id), json!({"seatIndex": index})).to_request()).await;
            assert_eq!(resp.status(), 400);
        }
        let resp = test::call_service(&app, post("bob", &format!("/group/{}/seat/request", group_id), json!({"seat": 1})).to_request()).await;
        assert_eq!(resp.status(), 400);
    }
}
