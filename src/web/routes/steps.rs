//! The wizard pages: render on GET, collect and navigate on POST.

use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::labels::labels;
use crate::web::{AppError, AppState};
use crate::wizard::{in_range, step_spec, NavAction, REVIEW_STEP};

/// `GET /step/:n`: render the page pre-populated from FormState.
/// Anything that is not a wizard step redirects back to the language
/// chooser.
pub async fn show(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Some(n) = parse_step(&raw) else {
        return Ok(Redirect::to("/").into_response());
    };

    let sref = state.sessions.establish(&headers).await;
    let session = state.sessions.load_taking_flash(&sref.token).await;
    let pack = labels(session.lang);

    let html = if n == REVIEW_STEP {
        state.pages.render_review(pack, &session)?
    } else {
        // in_range and not review implies a data step exists
        let spec = step_spec(n).ok_or_else(|| AppError::NotFound(format!("step {n}")))?;
        state.pages.render_step(spec, pack, &session)?
    };

    let mut response = Html(html).into_response();
    sref.apply(&mut response);
    Ok(response)
}

/// `POST /step/:n`: store the step's field set, try any uploads, and
/// redirect per the `action` flag with clamping.
pub async fn submit(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    request: Request,
) -> Result<Response, AppError> {
    let Some(n) = parse_step(&raw) else {
        return Ok(Redirect::to("/").into_response());
    };

    let headers = request.headers().clone();
    let (fields, uploads) = read_submission(request).await?;

    let sref = state.sessions.establish(&headers).await;

    if let Some(spec) = step_spec(n) {
        // store accepted uploads first; a rejected or failed upload is
        // silently dropped and the prior reference survives
        let mut stored_files: Vec<(&'static str, String)> = Vec::new();
        for slot in spec.file_slots {
            let Some(upload) = uploads.iter().find(|u| u.slot == *slot) else {
                continue;
            };
            if let Some(stored) = state.files.save(&upload.filename, &upload.bytes).await {
                stored_files.push((slot, stored));
            }
        }

        state
            .sessions
            .update(&sref.token, |session| {
                session.form.apply_step(spec, &fields);
                for (slot, stored) in stored_files {
                    session.form.set_file(slot, stored);
                }
            })
            .await;
        tracing::debug!(step = n, "step submission applied");
    }

    let action = NavAction::parse(fields.get("action").map(String::as_str).unwrap_or("next"));
    let target = action.apply(n);

    let mut response = Redirect::to(&format!("/step/{target}")).into_response();
    sref.apply(&mut response);
    Ok(response)
}

/// Parse the `:n` path segment. Non-numeric values and numbers outside
/// the wizard both come back as `None` so the handlers can redirect
/// instead of erroring.
fn parse_step(raw: &str) -> Option<u8> {
    raw.parse::<u8>().ok().filter(|n| in_range(*n))
}

/// A file part of a multipart submission.
struct Upload {
    slot: String,
    filename: String,
    bytes: Vec<u8>,
}

/// Read a step submission body, urlencoded or multipart.
async fn read_submission(
    request: Request,
) -> Result<(HashMap<String, String>, Vec<Upload>), AppError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        read_multipart(multipart).await
    } else {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &())
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok((fields, Vec::new()))
    }
}

async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(HashMap<String, String>, Vec<Upload>), AppError> {
    let mut fields = HashMap::new();
    let mut uploads = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let slot = field.name().unwrap_or_default().to_string();
        if let Some(filename) = field.file_name().map(ToString::to_string) {
            let bytes = field.bytes().await?;
            uploads.push(Upload {
                slot,
                filename,
                bytes: bytes.to_vec(),
            });
        } else {
            let value = field.text().await?;
            fields.insert(slot, value);
        }
    }

    Ok((fields, uploads))
}
