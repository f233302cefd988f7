use crate::entitys::group_member::{MemberRole, Membership, MembershipFields, MembershipPatch};
use crate::manager::group_directory::GroupDirectory;
use crate::manager::membership_store::MembershipStore;
use common::errors::AppError;
use log::info;
use std::sync::Arc;

/// 群成员生命周期：加入、退出、禁言、管理员
pub struct GroupMemberService {
    store: Arc<dyn MembershipStore>,
    groups: Arc<dyn GroupDirectory>,
}

impl GroupMemberService {
    pub fn new(store: Arc<dyn MembershipStore>, groups: Arc<dyn GroupDirectory>) -> Self {
        Self { store, groups }
    }

    /// 加入群组，已是成员时直接返回原记录
    pub async fn join(&self, group_id: &str, user_id: &str) -> Result<Membership, AppError> {
        self.active_group(group_id).await?;
        if let Some(existing) = self.store.find(group_id, user_id).await? {
            return Ok(existing);
        }
        let member = self.store.upsert(group_id, user_id, MembershipFields::default()).await?;
        info!("group {} user {} joined", group_id, user_id);
        Ok(member)
    }

    /// 退出群组，群主不能退出
    pub async fn quit(&self, group_id: &str, user_id: &str) -> Result<(), AppError> {
        let member = self.member(group_id, user_id).await?;
        if member.role == MemberRole::Owner {
            return Err(AppError::BizError("group.owner.cannot.quit".to_string()));
        }
        self.store.remove(group_id, user_id).await?;
        info!("group {} user {} quit ({} released)", group_id, user_id, member.seat);
        Ok(())
    }

    pub async fn find_member(&self, group_id: &str, user_id: &str) -> Result<Membership, AppError> {
        self.groups.find(group_id).await?.ok_or(AppError::NotFound)?;
        self.member(group_id, user_id).await
    }

    /// 禁言 / 取消禁言，仅群主或管理员可操作，群主不能被禁言
    pub async fn set_muted(&self, group_id: &str, operator_id: &str, target_id: &str, muted: bool) -> Result<(), AppError> {
        self.active_group(group_id).await?;
        let operator = self.member(group_id, operator_id).await?;
        if !operator.is_moderator() {
            return Err(AppError::Forbidden);
        }
        let target = self.member(group_id, target_id).await?;
        if target.role == MemberRole::Owner {
            return Err(AppError::BizError("group.owner.cannot.mute".to_string()));
        }
        self.store.update(group_id, target_id, MembershipPatch::muted(muted)).await?;
        info!("group {} operator {} set muted={} on {}", group_id, operator_id, muted, target_id);
        Ok(())
    }

    /// 设置 / 取消管理员，仅群主可操作
    pub async fn set_admin(&self, group_id: &str, operator_id: &str, target_id: &str, admin: bool) -> Result<(), AppError> {
        self.active_group(group_id).await?;
        let operator = self.member(group_id, operator_id).await?;
        if operator.role != MemberRole::Owner {
            return Err(AppError::Forbidden);
        }
        let target = self.member(group_id, target_id).await?;
        if target.role == MemberRole::Owner {
            return Err(AppError::BizError("group.owner.cannot.downgrade".to_string()));
        }
        self.store.update(group_id, target_id, MembershipPatch::admin(admin)).await?;
        info!("group {} owner {} set admin={} on {}", group_id, operator_id, admin, target_id);
        Ok(())
    }

    async fn active_group(&self, group_id: &str) -> Result<(), AppError> {
        let group = self.groups.find(group_id).await?.ok_or(AppError::NotFound)?;
        if !group.is_active {
            return Err(AppError::GroupInactive);
        }
        Ok(())
    }

    async fn member(&self, group_id: &str, user_id: &str) -> Result<Membership, AppError> {
        self.store.find(group_id, user_id).await?.ok_or(AppError::NotAMember)
    }
}
