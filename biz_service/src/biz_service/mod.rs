pub mod group_member_service;
pub mod group_service;
pub mod seat_service;

use crate::manager::group_directory::GroupDirectory;
use crate::manager::local_group_directory::LocalGroupDirectory;
use crate::manager::local_membership_store::LocalMembershipStore;
use crate::manager::membership_store::MembershipStore;
use crate::manager::mongo_group_directory::MongoGroupDirectory;
use crate::manager::mongo_membership_store::MongoMembershipStore;
use common::config::{AppConfig, StoreBackend};
use common::errors::AppError;
use common::repository::db::init_db;
use group_member_service::GroupMemberService;
use group_service::GroupService;
use log::{info, warn};
use seat_service::SeatService;
use std::sync::Arc;

/// 业务服务集合，共享同一个成员存储与群组目录
#[derive(Clone)]
pub struct BizServices {
    pub seat_service: Arc<SeatService>,
    pub group_member_service: Arc<GroupMemberService>,
    pub group_service: Arc<GroupService>,
    pub store: Arc<dyn MembershipStore>,
}

impl BizServices {
    pub fn new(store: Arc<dyn MembershipStore>, groups: Arc<dyn GroupDirectory>) -> Self {
        Self {
            seat_service: Arc::new(SeatService::new(store.clone(), groups.clone())),
            group_member_service: Arc::new(GroupMemberService::new(store.clone(), groups.clone())),
            group_service: Arc::new(GroupService::new(store.clone(), groups)),
            store,
        }
    }

    /// 进程内存储，测试及 `store.backend = "memory"` 使用
    pub fn local() -> Self {
        Self::new(Arc::new(LocalMembershipStore::new()), Arc::new(LocalGroupDirectory::new()))
    }
}

/// 按配置初始化存储后端并构建业务服务
pub async fn init_service(config: &AppConfig) -> Result<BizServices, AppError> {
    match config.get_store().backend {
        StoreBackend::Mongo => {
            let db = init_db(&config.get_database()).await?;
            let store = MongoMembershipStore::new(db.clone());
            store.ensure_indexes().await?;
            let groups = MongoGroupDirectory::new(db);
            groups.ensure_indexes().await?;
            info!("biz services initialized with mongo store");
            Ok(BizServices::new(Arc::new(store), Arc::new(groups)))
        }
        StoreBackend::Memory => {
            warn!("biz services initialized with in-memory store, data is lost on restart");
            Ok(BizServices::local())
        }
    }
}
