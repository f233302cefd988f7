use crate::entitys::group_entity::GroupInfo;
use crate::manager::group_directory::GroupDirectory;
use async_trait::async_trait;
use common::errors::AppError;
use common::repository_util::{BaseRepository, Repository, is_duplicate_key};
use common::util::date_util::now;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};

#[derive(Debug)]
pub struct MongoGroupDirectory {
    pub dao: BaseRepository<GroupInfo>,
}

impl MongoGroupDirectory {
    pub fn new(db: Database) -> Self {
        Self { dao: BaseRepository::new(db.collection("group_info")) }
    }

    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(IndexOptions::builder().name("uk_group_id".to_string()).unique(true).build())
                .build(),
        ];
        self.dao.ensure_indexes(indexes).await?;
        Ok(())
    }
}

#[async_trait]
impl GroupDirectory for MongoGroupDirectory {
    async fn find(&self, group_id: &str) -> Result<Option<GroupInfo>, AppError> {
        Ok(self.dao.find_one(doc! { "id": group_id }).await?)
    }

    async fn insert(&self, group: GroupInfo) -> Result<(), AppError> {
        match self.dao.insert(&group).await {
            Ok(()) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AppError::Conflict),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_active(&self, group_id: &str, active: bool) -> Result<bool, AppError> {
        let matched = self.dao.update_one(doc! { "id": group_id }, doc! { "$set": { "is_active": active, "update_time": now() } }).await?;
        Ok(matched > 0)
    }
}
