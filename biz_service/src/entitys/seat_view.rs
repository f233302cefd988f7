use crate::entitys::group_member::{MemberRole, MemberWithProfile};
use crate::entitys::seat::{SeatState, TABLE_SEAT_COUNT};
use log::warn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 圆桌视图：固定 10 个座位 + 等待列表
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub table_seats: Vec<TableSeat>,
    pub waiting_users: Vec<WaitingUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableSeat {
    pub position: u8,
    pub user: Option<SeatedUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatedUser {
    pub id: String,
    pub username: String,
    pub nationality: Option<String>,
    pub native_language: Option<String>,
    pub target_language: Option<String>,
    pub role: MemberRole,
    pub is_admin: bool,
    pub is_muted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitingUser {
    pub id: String,
    pub name: String,
    pub has_requested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_seat_position: Option<u8>,
    pub joined_at: i64,
}

impl SeatView {
    /// 把成员记录整理成圆桌视图，按输入顺序处理。
    ///
    /// 同一座位出现多条入座记录时后处理的覆盖先处理的，被覆盖的成员既不在座位上也不在等待列表中。
    pub fn build(group_id: &str, members: Vec<MemberWithProfile>) -> Self {
        let mut table_seats: Vec<TableSeat> = (0..TABLE_SEAT_COUNT).map(|position| TableSeat { position, user: None }).collect();
        let mut waiting_users = Vec::new();

        for MemberWithProfile { member, profile } in members {
            match member.seat {
                SeatState::Seated(index) => {
                    let slot = &mut table_seats[index.get() as usize];
                    if let Some(previous) = &slot.user {
                        warn!("group {} seat {} held by both {} and {}, keeping the latter", group_id, index, previous.id, member.user_id);
                    }
                    slot.user = Some(SeatedUser {
                        id: member.user_id,
                        username: profile.username,
                        nationality: profile.nationality,
                        native_language: profile.native_language,
                        target_language: profile.target_language,
                        role: member.role,
                        is_admin: member.is_admin,
                        is_muted: member.is_muted,
                    });
                }
                SeatState::Requesting(index) => waiting_users.push(WaitingUser {
                    id: member.user_id,
                    name: profile.username,
                    has_requested: true,
                    requested_seat_position: Some(index.get()),
                    joined_at: member.joined_at,
                }),
                SeatState::Unseated => waiting_users.push(WaitingUser {
                    id: member.user_id,
                    name: profile.username,
                    has_requested: false,
                    requested_seat_position: None,
                    joined_at: member.joined_at,
                }),
            }
        }
        // sort_by_key 是稳定排序，相同 joined_at 保持存储顺序
        waiting_users.sort_by_key(|w| w.joined_at);
        Self { table_seats, waiting_users }
    }

    pub fn seated_user(&self, position: u8) -> Option<&SeatedUser> {
        self.table_seats.get(position as usize).and_then(|s| s.user.as_ref())
    }

    pub fn waiting_user(&self, user_id: &str) -> Option<&WaitingUser> {
        self.waiting_users.iter().find(|w| w.id == user_id)
    }
}
