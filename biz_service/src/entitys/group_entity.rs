use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
pub struct GroupInfo {
    pub id: String,                         // 群组唯一 ID（UUID）
    pub name: String,                       // 群名称（语言/话题）
    pub owner_id: String,                   // 群主用户 ID
    pub is_active: bool,                    // false 表示已解散（逻辑删除）
    /// 创建时间（Unix 秒时间戳）
    pub create_time: i64,
    /// 最后更新时间（Unix 秒时间戳）
    pub update_time: i64,
}
