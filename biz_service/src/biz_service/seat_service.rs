use crate::entitys::group_entity::GroupInfo;
use crate::entitys::group_member::Membership;
use crate::entitys::seat::{SeatIndex, SeatState};
use crate::entitys::seat_view::SeatView;
use crate::manager::group_directory::GroupDirectory;
use crate::manager::membership_store::MembershipStore;
use common::errors::AppError;
use log::info;
use std::sync::Arc;

/// 圆桌座位与上麦申请
pub struct SeatService {
    store: Arc<dyn MembershipStore>,
    groups: Arc<dyn GroupDirectory>,
}

impl SeatService {
    pub fn new(store: Arc<dyn MembershipStore>, groups: Arc<dyn GroupDirectory>) -> Self {
        Self { store, groups }
    }

    /// 生成圆桌视图，无副作用。已解散的群组仍可查看。
    pub async fn compute_seat_view(&self, group_id: &str) -> Result<SeatView, AppError> {
        self.groups.find(group_id).await?.ok_or(AppError::NotFound)?;
        let members = self.store.list_by_group(group_id).await?;
        Ok(SeatView::build(group_id, members))
    }

    /// 申请座位：只记录申请，不检查座位是否被占用，占用检查在审批时进行。
    pub async fn request_seat(&self, group_id: &str, user_id: &str, seat_index: i64) -> Result<(), AppError> {
        let seat = SeatIndex::new(seat_index)?;
        self.active_group(group_id).await?;
        let member = self.member(group_id, user_id).await?;
        self.store.update(group_id, user_id, member.seat_patch(SeatState::Requesting(seat))).await?;
        info!("group {} user {} {} -> requesting({})", group_id, user_id, member.seat, seat);
        Ok(())
    }

    /// 入座或离座。
    ///
    /// `Some(k)` 仅群主或管理员可直接入座（普通成员须经申请审批），为条件写入，座位被他人占用时返回
    /// `AppError::SeatOccupied`；已坐在 k 上时直接成功。`None` 离座，任何成员可重复调用。
    pub async fn set_seat(&self, group_id: &str, user_id: &str, seat_index: Option<i64>) -> Result<(), AppError> {
        let seat = seat_index.map(SeatIndex::new).transpose()?;
        self.active_group(group_id).await?;
        let member = self.member(group_id, user_id).await?;
        match seat {
            Some(seat) if member.seat == SeatState::Seated(seat) => {}
            Some(seat) => {
                if !member.is_moderator() {
                    return Err(AppError::Forbidden);
                }
                self.store.claim_seat(group_id, user_id, seat).await?;
                info!("group {} user {} {} -> seated({})", group_id, user_id, member.seat, seat);
            }
            None => {
                self.store.update(group_id, user_id, member.seat_patch(SeatState::Unseated)).await?;
                info!("group {} user {} {} -> unseated", group_id, user_id, member.seat);
            }
        }
        Ok(())
    }

    /// 群主或管理员批准申请：`Requesting(k) -> Seated(k)`。座位已被占用时申请保持不变。
    pub async fn approve_request(&self, group_id: &str, operator_id: &str, target_id: &str) -> Result<SeatIndex, AppError> {
        self.active_group(group_id).await?;
        self.moderator(group_id, operator_id).await?;
        let target = self.member(group_id, target_id).await?;
        let seat = target
            .seat
            .requested_seat()
            .ok_or_else(|| AppError::InvalidTransition(format!("{} is {}, not requesting", target_id, target.seat)))?;
        self.store.claim_seat(group_id, target_id, seat).await?;
        info!("group {} operator {} approved {} -> seated({})", group_id, operator_id, target_id, seat);
        Ok(seat)
    }

    /// 群主或管理员拒绝申请：`Requesting(k) -> Unseated`。
    pub async fn deny_request(&self, group_id: &str, operator_id: &str, target_id: &str) -> Result<(), AppError> {
        self.active_group(group_id).await?;
        self.moderator(group_id, operator_id).await?;
        self.clear_request(group_id, target_id).await?;
        info!("group {} operator {} denied request of {}", group_id, operator_id, target_id);
        Ok(())
    }

    /// 成员撤回自己的申请。
    pub async fn cancel_request(&self, group_id: &str, user_id: &str) -> Result<(), AppError> {
        self.active_group(group_id).await?;
        self.clear_request(group_id, user_id).await?;
        info!("group {} user {} cancelled seat request", group_id, user_id);
        Ok(())
    }

    /// 群主或管理员把入座成员请下座位：`Seated(k) -> Unseated`。
    pub async fn vacate_seat(&self, group_id: &str, operator_id: &str, target_id: &str) -> Result<(), AppError> {
        self.active_group(group_id).await?;
        self.moderator(group_id, operator_id).await?;
        let target = self.member(group_id, target_id).await?;
        if target.seat.seated_at().is_none() {
            return Err(AppError::InvalidTransition(format!("{} is {}, not seated", target_id, target.seat)));
        }
        self.store.update(group_id, target_id, target.seat_patch(SeatState::Unseated)).await?;
        info!("group {} operator {} vacated seat of {}", group_id, operator_id, target_id);
        Ok(())
    }

    async fn clear_request(&self, group_id: &str, user_id: &str) -> Result<(), AppError> {
        let member = self.member(group_id, user_id).await?;
        if member.seat.requested_seat().is_none() {
            return Err(AppError::InvalidTransition(format!("{} is {}, not requesting", user_id, member.seat)));
        }
        self.store.update(group_id, user_id, member.seat_patch(SeatState::Unseated)).await
    }

    async fn active_group(&self, group_id: &str) -> Result<GroupInfo, AppError> {
        let group = self.groups.find(group_id).await?.ok_or(AppError::NotFound)?;
        if !group.is_active {
            return Err(AppError::GroupInactive);
        }
        Ok(group)
    }

    async fn member(&self, group_id: &str, user_id: &str) -> Result<Membership, AppError> {
        self.store.find(group_id, user_id).await?.ok_or(AppError::NotAMember)
    }

    async fn moderator(&self, group_id: &str, operator_id: &str) -> Result<Membership, AppError> {
        let operator = self.member(group_id, operator_id).await?;
        if !operator.is_moderator() {
            return Err(AppError::Forbidden);
        }
        Ok(operator)
    }
}
