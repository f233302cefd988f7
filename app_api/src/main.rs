use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use app_api::handlers;
use app_api::result::AppState;
use common::config::{AppConfig, SysConfig};
use log::{LevelFilter, warn};
use std::str::FromStr;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 读取配置文件
    AppConfig::init("api-config.toml").map_err(std::io::Error::other)?;
    let app_cfg = AppConfig::get();
    //初始化日志
    init_log(&app_cfg.get_sys());

    let biz = biz_service::init_service(&app_cfg).await.map_err(std::io::Error::other)?;
    let state = web::Data::new(AppState::new(biz));

    let address_and_port = format!("{}:{}", &app_cfg.get_server().host, &app_cfg.get_server().port);
    warn!("Starting server on {}", address_and_port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(handlers::json_config())
            // 配置 控制器
            .configure(handlers::configure)
    })
    .keep_alive(actix_web::http::KeepAlive::Timeout(std::time::Duration::from_secs(600))) // 允许 10 分钟超时
    .bind(address_and_port)?
    .run()
    .await
}

fn init_log(sys: &SysConfig) {
    let level = LevelFilter::from_str(&sys.log_level).unwrap_or(LevelFilter::Info);
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}
