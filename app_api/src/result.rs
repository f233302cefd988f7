use biz_service::BizServices;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use utoipa::ToSchema;

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub biz: BizServices,
}

impl AppState {
    pub fn new(biz: BizServices) -> Self {
        Self { biz }
    }
}

/// 统一响应结构（仅用于文档）
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiResponse<T> {
    code: i32,
    success: bool,
    data: Option<T>,
}

pub fn result() -> Value {
    serde_json::json!({"code":200,"success":true})
}

pub fn result_data<T: Serialize + Debug>(data: T) -> Value {
    serde_json::json!({"code":200,"success":true,"data":data})
}
