use crate::entitys::group_member::{MemberWithProfile, Membership, MembershipFields, MembershipPatch};
use crate::entitys::seat::{SeatIndex, SeatState};
use crate::entitys::user_entity::UserProfile;
use crate::manager::membership_store::MembershipStore;
use async_trait::async_trait;
use common::errors::AppError;
use common::util::date_util::now_millis;
use dashmap::DashMap;

/// 进程内成员存储
///
/// 每个群组的成员按加入顺序保存在一个 `Vec` 中；写操作持有该群组条目的写锁，
/// 检查与写入在同一把锁内完成。
#[derive(Debug, Default)]
pub struct LocalMembershipStore {
    group_members_map: DashMap<String, Vec<Membership>>,
    profile_map: DashMap<String, UserProfile>,
}

impl LocalMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipStore for LocalMembershipStore {
    async fn upsert(&self, group_id: &str, user_id: &str, fields: MembershipFields) -> Result<Membership, AppError> {
        let now = now_millis();
        let mut members = self.group_members_map.entry(group_id.to_string()).or_default();
        if let Some(member) = members.iter_mut().find(|m| m.user_id == user_id) {
            member.role = fields.role;
            member.is_admin = fields.is_admin;
            member.is_muted = fields.is_muted;
            member.update_time = now;
            return Ok(member.clone());
        }
        let member = Membership::new(group_id, user_id, &fields, now);
        members.push(member.clone());
        Ok(member)
    }

    async fn find(&self, group_id: &str, user_id: &str) -> Result<Option<Membership>, AppError> {
        let found = self.group_members_map.get(group_id).and_then(|members| members.iter().find(|m| m.user_id == user_id).cloned());
        Ok(found)
    }

    async fn list_by_group(&self, group_id: &str) -> Result<Vec<MemberWithProfile>, AppError> {
        let members = self.group_members_map.get(group_id).map(|members| members.clone()).unwrap_or_default();
        let result = members
            .into_iter()
            .map(|member| {
                let profile = self.profile_map.get(&member.user_id).map(|p| p.clone()).unwrap_or_else(|| UserProfile::placeholder(&member.user_id));
                MemberWithProfile { member, profile }
            })
            .collect();
        Ok(result)
    }

    async fn update(&self, group_id: &str, user_id: &str, patch: MembershipPatch) -> Result<(), AppError> {
        let mut members = self.group_members_map.get_mut(group_id).ok_or(AppError::NotAMember)?;
        let member = members.iter_mut().find(|m| m.user_id == user_id).ok_or(AppError::NotAMember)?;
        patch.apply(member, now_millis());
        Ok(())
    }

    async fn claim_seat(&self, group_id: &str, user_id: &str, seat: SeatIndex) -> Result<(), AppError> {
        let mut members = self.group_members_map.get_mut(group_id).ok_or(AppError::NotAMember)?;
        if !members.iter().any(|m| m.user_id == user_id) {
            return Err(AppError::NotAMember);
        }
        if members.iter().any(|m| m.user_id != user_id && m.seat == SeatState::Seated(seat)) {
            return Err(AppError::SeatOccupied(seat.get()));
        }
        if let Some(member) = members.iter_mut().find(|m| m.user_id == user_id) {
            member.seat_patch(SeatState::Seated(seat)).apply(member, now_millis());
        }
        Ok(())
    }

    async fn remove(&self, group_id: &str, user_id: &str) -> Result<bool, AppError> {
        let Some(mut members) = self.group_members_map.get_mut(group_id) else {
            return Ok(false);
        };
        let before = members.len();
        members.retain(|m| m.user_id != user_id);
        Ok(members.len() != before)
    }

    async fn save_profile(&self, profile: UserProfile) -> Result<(), AppError> {
        self.profile_map.insert(profile.id.clone(), profile);
        Ok(())
    }
}
