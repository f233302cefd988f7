use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::error::{ErrorKind, Result, WriteFailure};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, IndexModel};
use serde::{Serialize, de::DeserializeOwned};

#[async_trait]
pub trait Repository<T> {
    async fn insert(&self, entity: &T) -> Result<()>;
    async fn find_one(&self, filter: Document) -> Result<Option<T>>;
    /// 按条件查询，`sort` 为空时保持插入顺序
    async fn query(&self, filter: Document, sort: Option<Document>) -> Result<Vec<T>>;
    /// 更新单条记录，返回匹配条数
    async fn update_one(&self, filter: Document, update: Document) -> Result<u64>;
    /// 不存在则插入，返回更新后的文档
    async fn upsert(&self, filter: Document, update: Document) -> Result<Option<T>>;
    async fn delete(&self, filter: Document) -> Result<u64>;
}

#[derive(Debug)]
pub struct BaseRepository<T: Send + Sync> {
    pub collection: Collection<T>,
}

impl<T: Send + Sync> BaseRepository<T> {
    pub fn new(collection: Collection<T>) -> Self {
        Self { collection }
    }

    /// 创建索引（已存在的同名索引会被跳过）
    pub async fn ensure_indexes(&self, indexes: Vec<IndexModel>) -> Result<()> {
        if indexes.is_empty() {
            return Ok(());
        }
        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// 以聚合管道更新单条记录（字段值可引用原文档），返回匹配条数
    pub async fn update_one_pipeline(&self, filter: Document, pipeline: Vec<Document>) -> Result<u64> {
        let result = self.collection.update_one(filter, pipeline).await?;
        Ok(result.matched_count)
    }
}

#[async_trait]
impl<T: Send + Sync> Repository<T> for BaseRepository<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    async fn insert(&self, entity: &T) -> Result<()> {
        self.collection.insert_one(entity).await?;
        Ok(())
    }

    async fn find_one(&self, filter: Document) -> Result<Option<T>> {
        let result = self.collection.find_one(filter).await?;
        Ok(result)
    }

    async fn query(&self, filter: Document, sort: Option<Document>) -> Result<Vec<T>> {
        let mut cursor = match sort {
            Some(sort) => self.collection.find(filter).sort(sort).await?,
            None => self.collection.find(filter).sort(doc! { "_id": 1 }).await?,
        };
        let mut result = vec![];
        while let Some(doc) = cursor.try_next().await? {
            result.push(doc);
        }
        Ok(result)
    }

    async fn update_one(&self, filter: Document, update: Document) -> Result<u64> {
        let result = self.collection.update_one(filter, update).await?;
        Ok(result.matched_count)
    }

    async fn upsert(&self, filter: Document, update: Document) -> Result<Option<T>> {
        let result = self
            .collection
            .find_one_and_update(filter, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(result)
    }

    async fn delete(&self, filter: Document) -> Result<u64> {
        let result = self.collection.delete_many(filter).await?;
        Ok(result.deleted_count)
    }
}

/// MongoDB 唯一索引冲突错误码
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// 判断是否为唯一索引冲突
pub fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(we)) => we.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(ce) => ce.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
