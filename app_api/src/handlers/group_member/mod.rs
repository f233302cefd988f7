pub mod group_member_admin;
pub mod group_member_info;
pub mod group_member_join;
pub mod group_member_mute;
pub mod group_member_quit;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    group_member_join::configure(cfg);
    group_member_quit::configure(cfg);
    group_member_info::configure(cfg);
    group_member_mute::configure(cfg);
    group_member_admin::configure(cfg);
}
