pub mod group_directory;
pub mod local_group_directory;
pub mod local_membership_store;
pub mod membership_store;
pub mod mongo_group_directory;
pub mod mongo_membership_store;
