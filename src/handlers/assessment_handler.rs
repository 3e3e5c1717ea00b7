use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::AssessmentDto};

#[get("/api/assessment")]
pub async fn get_assessment(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let dto = AssessmentDto::from(state.session_service.bank());
    Ok(HttpResponse::Ok().json(dto))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
