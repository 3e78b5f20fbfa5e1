use actix_web::{error, web, HttpResponse, Result};
use validator::Validate;

use crate::models::{AnswerRequest, AnswerResponse, ErrorResponse};
use crate::AppState;

pub async fn answer(
    state: web::Data<AppState>,
    req: web::Json<AnswerRequest>,
) -> Result<HttpResponse> {
    // Validate request
    if let Err(e) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_details(
            "Invalid request",
            format!("Validation error: {}", e),
        )));
    }

    let response = state.answer_service.answer(&req.message).await;
    Ok(HttpResponse::Ok().json(AnswerResponse::new(response)))
}

/// JSON extractor config whose rejections use the `{error, details}` body.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let details = err.to_string();
            error::InternalError::from_response(
                err,
                HttpResponse::BadRequest()
                    .json(ErrorResponse::with_details("Invalid request", details)),
            )
            .into()
        })
}
