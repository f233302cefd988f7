pub mod group_create;
pub mod group_dismiss;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    group_create::configure(cfg);
    group_dismiss::configure(cfg);
}
