use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use sedation_ready_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    config.validate_for_production();

    let state = AppState::new(config.clone()).expect("failed to build application state");

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            // The widget is embedded in the marketing page, a different origin
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::get_assessment)
            .service(handlers::create_session)
            .service(handlers::start_session)
            .service(handlers::submit_answer)
            .service(handlers::submit_lead)
            .service(handlers::get_session)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
