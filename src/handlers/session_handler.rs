use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{AnswerInput, LeadInput},
        response::SessionDto,
    },
};

#[post("/api/sessions")]
pub async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.session_service.create_session().await?;
    let dto = SessionDto::from_session(&session, state.session_service.bank());
    Ok(HttpResponse::Created().json(dto))
}

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get_session(&id).await?;
    let dto = SessionDto::from_session(&session, state.session_service.bank());
    Ok(HttpResponse::Ok().json(dto))
}

#[post("/api/sessions/{id}/start")]
pub async fn start_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.start(&id).await?;
    let dto = SessionDto::from_session(&session, state.session_service.bank());
    Ok(HttpResponse::Ok().json(dto))
}

#[post("/api/sessions/{id}/answers")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<AnswerInput>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .record_answer(&id, request.score)
        .await?;
    let dto = SessionDto::from_session(&session, state.session_service.bank());
    Ok(HttpResponse::Ok().json(dto))
}

#[post("/api/sessions/{id}/lead")]
pub async fn submit_lead(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<LeadInput>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .submit_lead(&id, request.into_inner())
        .await?;
    let dto = SessionDto::from_session(&session, state.session_service.bank());
    Ok(HttpResponse::Ok().json(dto))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::fixtures::two_by_two_bank;
    use crate::test_utils::test_helpers::assert_error_status;
    use actix_web::{test, App};

    fn test_state() -> AppState {
        AppState::with_bank(Config::test_config(), two_by_two_bank())
            .expect("test state should build")
    }

    #[actix_web::test]
    async fn test_create_session_starts_in_welcome() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(create_session),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["phase"], "welcome");
        assert_eq!(body["progress"]["answered"], 0);
    }

    #[actix_web::test]
    async fn test_start_returns_the_first_question() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(create_session)
                .service(start_session),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let created: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/start", id))
            .to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["phase"], "questioning");
        assert_eq!(body["question"]["id"], 1);
        assert_eq!(body["progress"]["position"], 1);
        assert_eq!(body["progress"]["total"], 4);
    }

    #[actix_web::test]
    async fn test_get_unknown_session_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(get_session),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_answer_before_start_is_a_conflict() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(create_session)
                .service(submit_answer),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let created: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/answers", id))
            .set_json(serde_json::json!({ "score": 2 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);
        assert_error_status(resp.status());
    }
}
