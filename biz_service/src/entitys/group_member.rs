use crate::entitys::seat::SeatState;
use crate::entitys::user_entity::UserProfile;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Membership {
    pub id: String,                            // 成员记录唯一 ID（格式：group_id:user_id）
    pub group_id: String,                      // 群组 ID
    pub user_id: String,                       // 用户 ID
    pub role: MemberRole,                      // 成员角色
    #[serde(default)]
    pub seat: SeatState,                       // 圆桌座位状态
    pub is_admin: bool,                        // 是否管理员（可审批上麦）
    pub is_muted: bool,                        // 是否被禁言
    /// 加入时间（Unix 毫秒时间戳），等待列表按此排序
    pub joined_at: i64,
    /// 最后更新时间（Unix 毫秒时间戳）
    pub update_time: i64,
}

impl Membership {
    pub fn build_id(group_id: &str, user_id: &str) -> String {
        format!("{}:{}", group_id, user_id)
    }

    pub fn new(group_id: &str, user_id: &str, fields: &MembershipFields, now: i64) -> Self {
        Self {
            id: Self::build_id(group_id, user_id),
            group_id: group_id.to_string(),
            user_id: user_id.to_string(),
            role: fields.role,
            seat: SeatState::Unseated,
            is_admin: fields.is_admin,
            is_muted: fields.is_muted,
            joined_at: now,
            update_time: now,
        }
    }

    /// 群主或管理员
    pub fn is_moderator(&self) -> bool {
        self.role == MemberRole::Owner || self.is_admin
    }

    /// 座位变更，角色随之调整
    pub fn seat_patch(&self, seat: SeatState) -> MembershipPatch {
        MembershipPatch { role: Some(self.role.for_seat(seat)), seat: Some(seat), ..Default::default() }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Default, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MemberRole {
    Owner,

    Speaker,

    #[default]
    Listener,
}

impl MemberRole {
    /// 群主角色不变；入座为 speaker，否则为 listener
    pub fn for_seat(self, seat: SeatState) -> Self {
        match (self, seat) {
            (MemberRole::Owner, _) => MemberRole::Owner,
            (_, SeatState::Seated(_)) => MemberRole::Speaker,
            _ => MemberRole::Listener,
        }
    }
}

/// upsert 时写入的字段；新建记录时座位为 `Unseated`，加入时间取当前时间
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipFields {
    pub role: MemberRole,
    pub is_admin: bool,
    pub is_muted: bool,
}

/// 部分更新，`None` 表示不修改
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MembershipPatch {
    pub role: Option<MemberRole>,
    pub seat: Option<SeatState>,
    pub is_admin: Option<bool>,
    pub is_muted: Option<bool>,
}

impl MembershipPatch {
    pub fn seat(seat: SeatState) -> Self {
        Self { seat: Some(seat), ..Default::default() }
    }

    pub fn muted(muted: bool) -> Self {
        Self { is_muted: Some(muted), ..Default::default() }
    }

    pub fn admin(admin: bool) -> Self {
        Self { is_admin: Some(admin), ..Default::default() }
    }

    pub fn apply(&self, member: &mut Membership, now: i64) {
        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(seat) = self.seat {
            member.seat = seat;
        }
        if let Some(is_admin) = self.is_admin {
            member.is_admin = is_admin;
        }
        if let Some(is_muted) = self.is_muted {
            member.is_muted = is_muted;
        }
        member.update_time = now;
    }
}

/// 成员记录 + 用户资料投影
#[derive(Debug, Clone)]
pub struct MemberWithProfile {
    pub member: Membership,
    pub profile: UserProfile,
}

/// 成员信息响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipView {
    pub group_id: String,
    pub user_id: String,
    pub role: MemberRole,
    /// 旧版座位编码：空=未入座，k=座位 k，-(k+1)=申请座位 k
    pub seat_position: Option<i32>,
    pub is_admin: bool,
    pub is_muted: bool,
    pub joined_at: i64,
}

impl From<&Membership> for MembershipView {
    fn from(m: &Membership) -> Self {
        Self {
            group_id: m.group_id.clone(),
            user_id: m.user_id.clone(),
            role: m.role,
            seat_position: m.seat.to_position(),
            is_admin: m.is_admin,
            is_muted: m.is_muted,
            joined_at: m.joined_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entitys::seat::SeatIndex;
    use std::str::FromStr;

    #[test]
    fn test_role_string_form() {
        assert_eq!(MemberRole::Owner.to_string(), "owner");
        assert_eq!(MemberRole::from_str("speaker").unwrap(), MemberRole::Speaker);
        assert_eq!(serde_json::to_string(&MemberRole::Listener).unwrap(), "\"listener\"");
    }

    #[test]
    fn test_patch_apply() {
        let mut m = Membership::new("g1", "u1", &MembershipFields::default(), 10);
        assert_eq!(m.id, "g1:u1");
        let seat = SeatState::Requesting(SeatIndex::new(2).unwrap());
        MembershipPatch::seat(seat).apply(&mut m, 20);
        assert_eq!(m.seat, seat);
        assert_eq!(m.update_time, 20);
        assert_eq!(m.joined_at, 10);
    }

    #[test]
    fn test_role_follows_seat() {
        let seated = SeatState::Seated(SeatIndex::new(1).unwrap());
        let requesting = SeatState::Requesting(SeatIndex::new(1).unwrap());
        assert_eq!(MemberRole::Listener.for_seat(seated), MemberRole::Speaker);
        assert_eq!(MemberRole::Speaker.for_seat(requesting), MemberRole::Listener);
        assert_eq!(MemberRole::Speaker.for_seat(SeatState::Unseated), MemberRole::Listener);
        assert_eq!(MemberRole::Owner.for_seat(seated), MemberRole::Owner);
        assert_eq!(MemberRole::Owner.for_seat(SeatState::Unseated), MemberRole::Owner);

        let m = Membership::new("g1", "u1", &MembershipFields::default(), 10);
        let patch = m.seat_patch(seated);
        assert_eq!(patch.seat, Some(seated));
        assert_eq!(patch.role, Some(MemberRole::Speaker));
    }

    #[test]
    fn test_view_exposes_legacy_position() {
        let mut m = Membership::new("g1", "u1", &MembershipFields::default(), 10);
        m.seat = SeatState::Requesting(SeatIndex::new(3).unwrap());
        let view = MembershipView::from(&m);
        assert_eq!(view.seat_position, Some(-4));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["seatPosition"], -4);
        assert_eq!(json["userId"], "u1");
    }
}
