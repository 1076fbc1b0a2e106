//! Language chooser, the entry point of the wizard.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::labels::{labels, Lang};
use crate::web::pages::page_context;
use crate::web::{AppError, AppState};
use crate::wizard::FIRST_STEP;

/// `GET /`: render the language chooser.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let sref = state.sessions.establish(&headers).await;
    let session = state.sessions.load_taking_flash(&sref.token).await;
    let pack = labels(session.lang);

    let context = page_context(pack.sections.language, pack, &session, 1);
    let html = state.pages.render("language", &context)?;

    let mut response = Html(html).into_response();
    sref.apply(&mut response);
    Ok(response)
}

/// `POST /set-language`: pick a language, reset the form, start at
/// the first data step.
pub async fn set_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let lang = Lang::parse(form.get("lang").map(String::as_str).unwrap_or("en"));

    let sref = state.sessions.establish(&headers).await;
    state.sessions.reset(&sref.token, lang).await;
    tracing::info!(lang = lang.code(), "wizard started");

    let mut response = Redirect::to(&format!("/step/{FIRST_STEP}")).into_response();
    sref.apply(&mut response);
    Ok(response)
}
