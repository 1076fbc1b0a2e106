//! Finalize: turn the accumulated form into a durable member record.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::labels::labels;
use crate::storage::MemberRecord;
use crate::web::pages::page_context;
use crate::web::{AppError, AppState};
use crate::wizard::REVIEW_STEP;

/// `POST /submit`: require a non-empty name, insert one record in a
/// transaction, clear the form on success. On a persistence failure
/// the form survives so the visitor can retry from the review page.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let sref = state.sessions.establish(&headers).await;
    let session = state.sessions.load(&sref.token).await;

    if session.form.get("name").is_empty() {
        state
            .sessions
            .update(&sref.token, |s| {
                s.flash = Some("Session expired or incomplete. Please start again.".to_string());
            })
            .await;
        let mut response = Redirect::to("/").into_response();
        sref.apply(&mut response);
        return Ok(response);
    }

    let record = MemberRecord::from_form(session.lang, &session.form);

    let target = match state.members.insert(&record) {
        Ok(id) => {
            tracing::info!(id, lang = %record.lang, "member record created");
            state
                .sessions
                .update(&sref.token, |s| s.form.clear())
                .await;
            "/thank-you".to_string()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to store member record");
            state
                .sessions
                .update(&sref.token, |s| {
                    s.flash = Some("Error saving submission. Please try again.".to_string());
                })
                .await;
            format!("/step/{REVIEW_STEP}")
        }
    };

    let mut response = Redirect::to(&target).into_response();
    sref.apply(&mut response);
    Ok(response)
}

/// `GET /thank-you`: success page.
pub async fn thank_you(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let sref = state.sessions.establish(&headers).await;
    let session = state.sessions.load_taking_flash(&sref.token).await;
    let pack = labels(session.lang);

    let context = page_context("Thank You", pack, &session, 1);
    let html = state.pages.render("thank_you", &context)?;

    let mut response = Html(html).into_response();
    sref.apply(&mut response);
    Ok(response)
}
