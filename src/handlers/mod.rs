use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::chat::{ChatRequest, ChatResponse};
use crate::services::ChatService;

pub async fn root_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Backend is running successfully"
    }))
}

pub async fn test_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({ "msg": "chat route working" }))
}

pub async fn chat_handler(
    request: web::Json<ChatRequest>,
    chat_service: web::Data<ChatService>,
) -> impl Responder {
    let reply = chat_service.reply(&request.message).await;
    HttpResponse::Ok().json(ChatResponse { reply })
}
