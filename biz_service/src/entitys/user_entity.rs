use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 用户资料投影（来自外部认证服务同步的数据，本服务只读）
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema, PartialEq, Eq)]
pub struct UserProfile {
    /// 用户唯一 ID
    pub id: String,
    /// 用户名
    pub username: String,
    pub email: Option<String>,
    /// 国籍
    pub nationality: Option<String>,
    /// 母语
    pub native_language: Option<String>,
    /// 目标语言
    pub target_language: Option<String>,
}

impl UserProfile {
    /// 没有资料记录的成员，用户名退化为用户 ID
    pub fn placeholder(user_id: &str) -> Self {
        Self { id: user_id.to_string(), username: user_id.to_string(), ..Default::default() }
    }
}
