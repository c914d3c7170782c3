use axum::Server;
use log::info;
use std::net::SocketAddr;
use wishes_msvc::build_app;
use wishes_msvc::config::Config;

#[tokio::main]
async fn main() {
    pretty_env_logger::init_timed();

    let config = Config::from_env().expect("could not load configuration");

    let app = build_app(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(
        "Server is running on port {} (auth {})",
        config.port,
        if config.auth_enabled { "enabled" } else { "disabled" }
    );

    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
