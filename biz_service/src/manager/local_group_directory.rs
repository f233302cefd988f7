use crate::entitys::group_entity::GroupInfo;
use crate::manager::group_directory::GroupDirectory;
use async_trait::async_trait;
use common::errors::AppError;
use common::util::date_util::now;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

#[derive(Debug, Default)]
pub struct LocalGroupDirectory {
    group_info_map: DashMap<String, GroupInfo>,
}

impl LocalGroupDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupDirectory for LocalGroupDirectory {
    async fn find(&self, group_id: &str) -> Result<Option<GroupInfo>, AppError> {
        Ok(self.group_info_map.get(group_id).map(|g| g.clone()))
    }

    async fn insert(&self, group: GroupInfo) -> Result<(), AppError> {
        match self.group_info_map.entry(group.id.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(group);
                Ok(())
            }
        }
    }

    async fn set_active(&self, group_id: &str, active: bool) -> Result<bool, AppError> {
        match self.group_info_map.get_mut(group_id) {
            Some(mut group) => {
                group.is_active = active;
                group.update_time = now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_deactivate() {
        let dir = LocalGroupDirectory::new();
        let group = GroupInfo { id: "g1".into(), owner_id: "u1".into(), is_active: true, ..Default::default() };
        dir.insert(group.clone()).await.unwrap();
        assert!(matches!(dir.insert(group).await, Err(AppError::Conflict)));

        assert!(dir.set_active("g1", false).await.unwrap());
        assert!(!dir.find("g1").await.unwrap().unwrap().is_active);
        assert!(!dir.set_active("missing", false).await.unwrap());
        assert!(dir.find("missing").await.unwrap().is_none());
    }
}
