use crate::entitys::group_member::{MemberWithProfile, Membership, MembershipFields, MembershipPatch};
use crate::entitys::seat::SeatIndex;
use crate::entitys::user_entity::UserProfile;
use async_trait::async_trait;
use common::errors::AppError;

/// 群成员存储接口
///
/// 以 `(group_id, user_id)` 为唯一键。座位的排他性由 [`MembershipStore::claim_seat`] 的条件写入保证，
/// [`MembershipStore::update`] 不做任何占用检查。
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// 不存在则插入（座位为空、加入时间为当前时间），存在则只更新 `fields` 中的字段。
    ///
    /// # Returns
    /// * 写入后的成员记录
    async fn upsert(&self, group_id: &str, user_id: &str, fields: MembershipFields) -> Result<Membership, AppError>;

    /// 查询单个成员记录。
    async fn find(&self, group_id: &str, user_id: &str) -> Result<Option<Membership>, AppError>;

    /// 查询群组全部成员并关联用户资料，按加入顺序返回。
    async fn list_by_group(&self, group_id: &str) -> Result<Vec<MemberWithProfile>, AppError>;

    /// 部分更新。
    ///
    /// # Errors
    /// * `AppError::NotAMember` - 成员记录不存在
    async fn update(&self, group_id: &str, user_id: &str, patch: MembershipPatch) -> Result<(), AppError>;

    /// 条件写入：仅当群内没有其他成员占用 `seat` 时，将该成员设为入座，非群主角色同时改为 speaker。
    ///
    /// # Errors
    /// * `AppError::SeatOccupied` - 座位已被其他成员占用
    /// * `AppError::NotAMember` - 成员记录不存在
    async fn claim_seat(&self, group_id: &str, user_id: &str, seat: SeatIndex) -> Result<(), AppError>;

    /// 删除成员记录，返回是否存在。
    async fn remove(&self, group_id: &str, user_id: &str) -> Result<bool, AppError>;

    /// 写入或覆盖用户资料投影。
    async fn save_profile(&self, profile: UserProfile) -> Result<(), AppError>;
}
