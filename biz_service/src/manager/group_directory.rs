use crate::entitys::group_entity::GroupInfo;
use async_trait::async_trait;
use common::errors::AppError;

/// 群组目录接口
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// 获取群组信息，不存在返回 `None`。
    async fn find(&self, group_id: &str) -> Result<Option<GroupInfo>, AppError>;

    /// 新建群组。
    ///
    /// # Errors
    /// * `AppError::Conflict` - 群组 ID 已存在
    async fn insert(&self, group: GroupInfo) -> Result<(), AppError>;

    /// 修改群组状态，返回群组是否存在。
    async fn set_active(&self, group_id: &str, active: bool) -> Result<bool, AppError>;
}
