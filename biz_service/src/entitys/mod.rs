pub mod group_entity;
pub mod group_member;
pub mod seat;
pub mod seat_view;
pub mod user_entity;
