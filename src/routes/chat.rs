use actix_web::{error, web, HttpRequest, Scope};

use crate::error::ApiError;
use crate::handlers;
use crate::services::ChatService;

fn payload_error(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    ApiError::BadPayload(err.to_string()).into()
}

pub fn chat_routes(chat_service: web::Data<ChatService>) -> Scope {
    web::scope("/chat")
        .app_data(chat_service)
        .app_data(web::JsonConfig::default().error_handler(payload_error))
        .route("/test", web::get().to(handlers::test_handler))
        .route("/", web::post().to(handlers::chat_handler))
        .route("", web::post().to(handlers::chat_handler))
}
