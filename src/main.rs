use std::io;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use pawnin::config::Config;
use pawnin::routes;
use pawnin::services::groq_service::GroqService;
use pawnin::services::ChatService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let groq_service = Arc::new(GroqService::new(config.groq_url.clone(), config.groq_key.clone()));
    let chat_service = web::Data::new(ChatService::new(groq_service, config.system_prompt.clone()));

    let addr = config.bind_address();
    info!("Starting server on: http://{}", addr);

    HttpServer::new(move || {
        let chat_service = chat_service.clone();
        App::new()
            .wrap(routes::cors())
            .wrap(middleware::Logger::default())
            .configure(|cfg| routes::configure(cfg, chat_service))
    })
    .bind(addr)?
    .run()
    .await
}
