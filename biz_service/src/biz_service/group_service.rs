use crate::entitys::group_entity::GroupInfo;
use crate::entitys::group_member::{MemberRole, MembershipFields};
use crate::manager::group_directory::GroupDirectory;
use crate::manager::membership_store::MembershipStore;
use common::errors::AppError;
use common::util::common_utils::build_id;
use common::util::date_util::now;
use log::{info, warn};
use std::sync::Arc;

pub struct GroupService {
    store: Arc<dyn MembershipStore>,
    groups: Arc<dyn GroupDirectory>,
}

impl GroupService {
    pub fn new(store: Arc<dyn MembershipStore>, groups: Arc<dyn GroupDirectory>) -> Self {
        Self { store, groups }
    }

    /// 创建群组，创建者成为群主（同时是管理员）
    pub async fn create_group(&self, owner_id: &str, name: &str) -> Result<GroupInfo, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("group.name.empty".to_string()));
        }
        let now = now();
        let group = GroupInfo {
            id: build_id(),
            name: name.trim().to_string(),
            owner_id: owner_id.to_string(),
            is_active: true,
            create_time: now,
            update_time: now,
        };
        // 群组记录存在时群主成员记录必然存在：先写成员记录，群组写入失败时删除
        let fields = MembershipFields { role: MemberRole::Owner, is_admin: true, is_muted: false };
        self.store.upsert(&group.id, owner_id, fields).await?;
        if let Err(e) = self.groups.insert(group.clone()).await {
            if let Err(rollback) = self.store.remove(&group.id, owner_id).await {
                warn!("group {} owner membership rollback failed: {}", group.id, rollback);
            }
            return Err(e);
        }
        info!("group {} created by {}", group.id, owner_id);
        Ok(group)
    }

    /// 解散群组（逻辑删除），仅群主可操作
    pub async fn dismiss_group(&self, operator_id: &str, group_id: &str) -> Result<(), AppError> {
        let group = self.groups.find(group_id).await?.ok_or(AppError::NotFound)?;
        if group.owner_id != operator_id {
            return Err(AppError::Forbidden);
        }
        self.groups.set_active(group_id, false).await?;
        info!("group {} dismissed by {}", group_id, operator_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::local_group_directory::LocalGroupDirectory;
    use crate::manager::local_membership_store::LocalMembershipStore;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 写入总是失败的群组目录，记录尝试写入的群组 ID
    #[derive(Default)]
    struct FailingDirectory {
        attempted: Mutex<Option<String>>,
    }

    #[async_trait]
    impl GroupDirectory for FailingDirectory {
        async fn find(&self, _group_id: &str) -> Result<Option<GroupInfo>, AppError> {
            Ok(None)
        }

        async fn insert(&self, group: GroupInfo) -> Result<(), AppError> {
            if let Ok(mut attempted) = self.attempted.lock() {
                *attempted = Some(group.id);
            }
            Err(AppError::Internal("insert failed".to_string()))
        }

        async fn set_active(&self, _group_id: &str, _active: bool) -> Result<bool, AppError> {
            Ok(false)
        }
    }

    fn service() -> (Arc<LocalMembershipStore>, Arc<LocalGroupDirectory>, GroupService) {
        let store = Arc::new(LocalMembershipStore::new());
        let groups = Arc::new(LocalGroupDirectory::new());
        (store.clone(), groups.clone(), GroupService::new(store, groups))
    }

    #[tokio::test]
    async fn test_create_group_registers_single_owner() {
        let (store, _, service) = service();
        let group = service.create_group("alice", " Spanish table ").await.unwrap();
        assert_eq!(group.name, "Spanish table");

        let members = store.list_by_group(&group.id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].member.role, MemberRole::Owner);
        assert!(members[0].member.is_admin);
    }

    #[tokio::test]
    async fn test_create_group_rejects_blank_name() {
        let (_, _, service) = service();
        assert!(matches!(service.create_group("alice", "  ").await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_dismiss_owner_only() {
        let (_, groups, service) = service();
        let group = service.create_group("alice", "French").await.unwrap();
        assert!(matches!(service.dismiss_group("bob", &group.id).await, Err(AppError::Forbidden)));
        service.dismiss_group("alice", &group.id).await.unwrap();
        assert!(!groups.find(&group.id).await.unwrap().unwrap().is_active);
        assert!(matches!(service.dismiss_group("alice", "missing").await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_failed_group_insert_leaves_no_owner_membership() {
        let store = Arc::new(LocalMembershipStore::new());
        let groups = Arc::new(FailingDirectory::default());
        let service = GroupService::new(store.clone(), groups.clone());

        assert!(matches!(service.create_group("alice", "French").await, Err(AppError::Internal(_))));
        let group_id = groups.attempted.lock().unwrap().clone().unwrap();
        assert!(store.find(&group_id, "alice").await.unwrap().is_none());
        assert!(store.list_by_group(&group_id).await.unwrap().is_empty());
    }
}
