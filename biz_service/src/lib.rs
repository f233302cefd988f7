pub mod biz_service;
pub mod entitys;
pub mod manager;

pub use biz_service::{BizServices, init_service};
