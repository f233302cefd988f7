pub mod db;
pub mod repository_util;
