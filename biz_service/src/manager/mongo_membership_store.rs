use crate::entitys::group_member::{MemberRole, MemberWithProfile, Membership, MembershipFields, MembershipPatch};
use crate::entitys::seat::{SeatIndex, SeatState};
use crate::entitys::user_entity::UserProfile;
use crate::manager::membership_store::MembershipStore;
use async_trait::async_trait;
use common::errors::AppError;
use common::repository_util::{BaseRepository, Repository, is_duplicate_key};
use common::util::date_util::now_millis;
use log::info;
use mongodb::bson::{Document, doc, to_bson, to_document};
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};
use std::collections::HashMap;

/// MongoDB 成员存储
///
/// 座位排他性依赖 `group_member` 上的部分唯一索引 `(group_id, seat.index)`（仅 `seat.state = "seated"`），
/// 启动时须先调用 [`MongoMembershipStore::ensure_indexes`]。
#[derive(Debug)]
pub struct MongoMembershipStore {
    pub dao: BaseRepository<Membership>,
    pub profile_dao: BaseRepository<UserProfile>,
}

impl MongoMembershipStore {
    pub fn new(db: Database) -> Self {
        Self { dao: BaseRepository::new(db.collection("group_member")), profile_dao: BaseRepository::new(db.collection("user_profile")) }
    }

    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let member_indexes = vec![
            IndexModel::builder()
                .keys(doc! { "group_id": 1, "user_id": 1 })
                .options(IndexOptions::builder().name("uk_group_user".to_string()).unique(true).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "group_id": 1, "seat.index": 1 })
                .options(
                    IndexOptions::builder()
                        .name("uk_group_seat".to_string())
                        .unique(true)
                        .partial_filter_expression(doc! { "seat.state": "seated" })
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "group_id": 1, "joined_at": 1 })
                .options(IndexOptions::builder().name("idx_group_joined".to_string()).build())
                .build(),
        ];
        self.dao.ensure_indexes(member_indexes).await?;

        let profile_indexes = vec![
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(IndexOptions::builder().name("uk_profile_id".to_string()).unique(true).build())
                .build(),
        ];
        self.profile_dao.ensure_indexes(profile_indexes).await?;
        info!("group_member / user_profile indexes ready");
        Ok(())
    }
}

fn member_filter(group_id: &str, user_id: &str) -> Document {
    doc! { "group_id": group_id, "user_id": user_id }
}

fn patch_to_set(patch: &MembershipPatch, now: i64) -> Result<Document, AppError> {
    let mut set = doc! { "update_time": now };
    if let Some(role) = patch.role {
        set.insert("role", role.to_string());
    }
    if let Some(seat) = patch.seat {
        set.insert("seat", to_bson(&seat)?);
    }
    if let Some(is_admin) = patch.is_admin {
        set.insert("is_admin", is_admin);
    }
    if let Some(is_muted) = patch.is_muted {
        set.insert("is_muted", is_muted);
    }
    Ok(set)
}

/// 入座写入：座位置为 `Seated(seat)`，非群主角色改为 speaker
fn claim_pipeline(seat: SeatIndex, now: i64) -> Result<Vec<Document>, AppError> {
    let owner = MemberRole::Owner.to_string();
    Ok(vec![doc! {
        "$set": {
            "seat": { "$literal": to_bson(&SeatState::Seated(seat))? },
            "role": { "$cond": [{ "$eq": ["$role", owner.as_str()] }, owner.as_str(), MemberRole::Speaker.to_string()] },
            "update_time": now,
        }
    }])
}

/// 唯一索引 `uk_group_seat` 冲突即座位已被占用
fn claim_error(e: mongodb::error::Error, seat: SeatIndex) -> AppError {
    if is_duplicate_key(&e) { AppError::SeatOccupied(seat.get()) } else { e.into() }
}

#[async_trait]
impl MembershipStore for MongoMembershipStore {
    async fn upsert(&self, group_id: &str, user_id: &str, fields: MembershipFields) -> Result<Membership, AppError> {
        let now = now_millis();
        let update = doc! {
            "$set": {
                "role": fields.role.to_string(),
                "is_admin": fields.is_admin,
                "is_muted": fields.is_muted,
                "update_time": now,
            },
            "$setOnInsert": {
                "id": Membership::build_id(group_id, user_id),
                "seat": to_bson(&SeatState::Unseated)?,
                "joined_at": now,
            }
        };
        let member = self.dao.upsert(member_filter(group_id, user_id), update).await?;
        member.ok_or_else(|| AppError::Internal(format!("upsert returned no document for {}:{}", group_id, user_id)))
    }

    async fn find(&self, group_id: &str, user_id: &str) -> Result<Option<Membership>, AppError> {
        Ok(self.dao.find_one(member_filter(group_id, user_id)).await?)
    }

    async fn list_by_group(&self, group_id: &str) -> Result<Vec<MemberWithProfile>, AppError> {
        let members = self.dao.query(doc! { "group_id": group_id }, Some(doc! { "joined_at": 1, "_id": 1 })).await?;
        if members.is_empty() {
            return Ok(vec![]);
        }
        let user_ids: Vec<&str> = members.iter().map(|m| m.user_id.as_str()).collect();
        let profiles: HashMap<String, UserProfile> =
            self.profile_dao.query(doc! { "id": { "$in": user_ids } }, None).await?.into_iter().map(|p| (p.id.clone(), p)).collect();

        let result = members
            .into_iter()
            .map(|member| {
                let profile = profiles.get(&member.user_id).cloned().unwrap_or_else(|| UserProfile::placeholder(&member.user_id));
                MemberWithProfile { member, profile }
            })
            .collect();
        Ok(result)
    }

    async fn update(&self, group_id: &str, user_id: &str, patch: MembershipPatch) -> Result<(), AppError> {
        let set = patch_to_set(&patch, now_millis())?;
        let matched = self.dao.update_one(member_filter(group_id, user_id), doc! { "$set": set }).await?;
        if matched == 0 {
            return Err(AppError::NotAMember);
        }
        Ok(())
    }

    async fn claim_seat(&self, group_id: &str, user_id: &str, seat: SeatIndex) -> Result<(), AppError> {
        let pipeline = claim_pipeline(seat, now_millis())?;
        match self.dao.update_one_pipeline(member_filter(group_id, user_id), pipeline).await {
            Ok(0) => Err(AppError::NotAMember),
            Ok(_) => Ok(()),
            Err(e) => Err(claim_error(e, seat)),
        }
    }

    async fn remove(&self, group_id: &str, user_id: &str) -> Result<bool, AppError> {
        let deleted = self.dao.delete(member_filter(group_id, user_id)).await?;
        Ok(deleted > 0)
    }

    async fn save_profile(&self, profile: UserProfile) -> Result<(), AppError> {
        let set = to_document(&profile)?;
        self.profile_dao.upsert(doc! { "id": profile.id.as_str() }, doc! { "$set": set }).await?;
        Ok(())
    }
}
