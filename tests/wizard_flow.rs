//! End-to-end wizard scenarios driven through the router.
//!
//! Each test builds an isolated portal (temp database, temp uploads
//! directory) and feeds requests through the router in-process.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use jan_membership::config::Config;
use jan_membership::web::{build_router, AppState};

struct TestPortal {
    router: Router,
    state: AppState,
    db_path: std::path::PathBuf,
    _temp_dir: TempDir,
}

impl TestPortal {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("members.db");

        let mut config = Config::default();
        config.server.secret_key = "wizard-flow-test-secret".to_string();
        config.paths.database = db_path.to_string_lossy().to_string();
        config.paths.uploads = temp_dir
            .path()
            .join("uploads")
            .to_string_lossy()
            .to_string();

        let state = AppState::from_config(&config).expect("Failed to build state");
        Self {
            router: build_router(state.clone()),
            state,
            db_path,
            _temp_dir: temp_dir,
        }
    }

    async fn get(&self, uri: &str, cookie: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn post_form(&self, uri: &str, cookie: &str, body: &str) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if !cookie.is_empty() {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn post_multipart(&self, uri: &str, cookie: &str, body: String) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::COOKIE, cookie)
            .body(Body::from(body))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Select a language and return the session cookie.
    async fn start(&self, lang: &str) -> String {
        let response = self
            .post_form("/set-language", "", &format!("lang={lang}"))
            .await;
        assert_eq!(location_of(&response), "/step/2");
        cookie_of(&response)
    }
}

const BOUNDARY: &str = "testformboundary";

fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    if let Some((slot, filename, bytes)) = file {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{slot}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        ));
        body.push_str(std::str::from_utf8(bytes).unwrap());
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

fn cookie_of(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

fn location_of(response: &Response<Body>) -> String {
    assert!(
        response.status().is_redirection(),
        "expected redirect, got {}",
        response.status()
    );
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry Location")
        .to_str()
        .unwrap()
        .to_string()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn full_wizard_flow_creates_one_member() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    let steps: [(&str, &str); 7] = [
        ("/step/2", "name=Test+User&full_name_en=Test+User&dob_bs=2046-01-01&dob_ad=1990-04-12&gender=Male&occupation=Engineer&action=next"),
        ("/step/3", "perm_address=Jiri&temp_address=Kathmandu&phone=9841000000&email=test%40example.com&action=next"),
        ("/step/4", "doc_type=Passport&doc_issued_date=2070-01-01&action=next"),
        ("/step/5", "education=Masters&action=next"),
        ("/step/6", "job_title=Engineer&experience_years=5&skills=Rust&org_name=Example+Pvt+Ltd&action=next"),
        ("/step/7", "father_name=Father&mother_name=Mother&spouse_name=&children=&em_name=Friend&em_relation=Friend&em_phone=9800000000&em_address=Jiri&action=next"),
        ("/step/8", "membership_type=Life+Member&pay_method=eSewa&transaction_id=TXN123&declaration=yes&action=next"),
    ];

    for (i, (uri, body)) in steps.iter().enumerate() {
        let response = portal.post_form(uri, &cookie, body).await;
        let expected = format!("/step/{}", i + 3);
        assert_eq!(location_of(&response), expected);
    }

    // review page shows the entered values
    let review = portal.get("/step/9", &cookie).await;
    assert_eq!(review.status(), StatusCode::OK);
    let html = body_text(review).await;
    assert!(html.contains("Test User"));
    assert!(html.contains("Life Member"));
    assert!(html.contains("TXN123"));

    // finalize
    let response = portal.post_form("/submit", &cookie, "").await;
    assert_eq!(location_of(&response), "/thank-you");

    assert_eq!(portal.state.members.count().unwrap(), 1);
    let record = portal.state.members.get(1).unwrap().unwrap();
    assert_eq!(record.name, "Test User");
    assert_eq!(record.lang, "en");
    assert_eq!(record.email, "test@example.com");
    assert_eq!(record.membership_type, "Life Member");
    assert_eq!(
        record.dob_ad,
        chrono::NaiveDate::from_ymd_opt(1990, 4, 12)
    );
    // no uploads in this run
    assert_eq!(record.doc_file, "");
    assert_eq!(record.payment_file, "");

    // form state is cleared after success
    let step2 = portal.get("/step/2", &cookie).await;
    let html = body_text(step2).await;
    assert!(!html.contains("Test User"));
}

#[tokio::test]
async fn finalize_without_name_creates_nothing() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    let response = portal.post_form("/submit", &cookie, "").await;
    assert_eq!(location_of(&response), "/");
    assert_eq!(portal.state.members.count().unwrap(), 0);

    // the flash message lands on the language page
    let index = portal.get("/", &cookie).await;
    let html = body_text(index).await;
    assert!(html.contains("Session expired or incomplete"));
}

#[tokio::test]
async fn whitespace_name_still_creates_a_record() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    // only a truly absent name reads as an expired session
    portal
        .post_form("/step/2", &cookie, "name=+++&action=next")
        .await;

    let response = portal.post_form("/submit", &cookie, "").await;
    assert_eq!(location_of(&response), "/thank-you");
    assert_eq!(portal.state.members.count().unwrap(), 1);
    let record = portal.state.members.get(1).unwrap().unwrap();
    assert_eq!(record.name, "   ");
}

#[tokio::test]
async fn failed_insert_flashes_and_keeps_the_form() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    portal
        .post_form("/step/2", &cookie, "name=Test+User&gender=Male&action=next")
        .await;

    // break persistence behind the portal's back
    rusqlite::Connection::open(&portal.db_path)
        .expect("Failed to open test db")
        .execute_batch("DROP TABLE members")
        .expect("Failed to drop table");

    let response = portal.post_form("/submit", &cookie, "").await;
    assert_eq!(location_of(&response), "/step/9");

    // the review page carries the flash and the entered values survive
    let html = body_text(portal.get("/step/9", &cookie).await).await;
    assert!(html.contains("Error saving submission"));
    assert!(html.contains("Test User"));
}

#[tokio::test]
async fn invalid_dob_is_stored_as_null() {
    let portal = TestPortal::new();
    let cookie = portal.start("ne").await;

    portal
        .post_form("/step/2", &cookie, "name=Test+User&dob_ad=not-a-date&action=next")
        .await;
    let response = portal.post_form("/submit", &cookie, "").await;
    assert_eq!(location_of(&response), "/thank-you");

    let record = portal.state.members.get(1).unwrap().unwrap();
    assert_eq!(record.name, "Test User");
    assert_eq!(record.lang, "ne");
    assert!(record.dob_ad.is_none());
}

#[tokio::test]
async fn navigation_clamps_to_valid_steps() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    // prev from the first data step stays put
    let response = portal
        .post_form("/step/2", &cookie, "name=X&action=prev")
        .await;
    assert_eq!(location_of(&response), "/step/2");

    // out-of-range steps bounce to the language chooser
    let response = portal.get("/step/12", &cookie).await;
    assert_eq!(location_of(&response), "/");
    let response = portal.post_form("/step/1", &cookie, "action=next").await;
    assert_eq!(location_of(&response), "/");

    // so do step numbers too large for the wizard's counter, and junk
    let response = portal.get("/step/300", &cookie).await;
    assert_eq!(location_of(&response), "/");
    let response = portal.get("/step/banana", &cookie).await;
    assert_eq!(location_of(&response), "/");
}

#[tokio::test]
async fn revisiting_a_step_shows_latest_values() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    portal
        .post_form("/step/3", &cookie, "phone=9841000000&action=next")
        .await;
    portal
        .post_form("/step/3", &cookie, "phone=9800000000&action=next")
        .await;

    let html = body_text(portal.get("/step/3", &cookie).await).await;
    assert!(html.contains("9800000000"));
    assert!(!html.contains("9841000000"));
}

#[tokio::test]
async fn accepted_upload_is_stored_and_linked() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    let body = multipart_body(
        &[("doc_type", "Passport"), ("doc_issued_date", ""), ("action", "next")],
        Some(("doc_file", "citizenship.png", b"fake png bytes")),
    );
    let response = portal.post_multipart("/step/4", &cookie, body).await;
    assert_eq!(location_of(&response), "/step/5");

    // revisit shows the stored reference
    let html = body_text(portal.get("/step/4", &cookie).await).await;
    assert!(html.contains("_citizenship.png"));

    // and the file serves back
    let stored = html
        .split("Saved: ")
        .nth(1)
        .and_then(|rest| rest.split('<').next())
        .unwrap()
        .trim()
        .to_string();
    let response = portal.get(&format!("/uploads/{stored}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "fake png bytes");
}

#[tokio::test]
async fn rejected_upload_keeps_prior_reference() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    // store a valid document first
    let body = multipart_body(
        &[("doc_type", "Passport"), ("action", "next")],
        Some(("doc_file", "scan.pdf", b"pdf bytes")),
    );
    portal.post_multipart("/step/4", &cookie, body).await;
    let html = body_text(portal.get("/step/4", &cookie).await).await;
    assert!(html.contains("_scan.pdf"));

    // a disallowed extension is silently ignored
    let body = multipart_body(
        &[("doc_type", "Passport"), ("action", "next")],
        Some(("doc_file", "malware.exe", b"nope")),
    );
    let response = portal.post_multipart("/step/4", &cookie, body).await;
    assert_eq!(location_of(&response), "/step/5");

    let html = body_text(portal.get("/step/4", &cookie).await).await;
    assert!(html.contains("_scan.pdf"));
    assert!(!html.contains("malware"));
}

#[tokio::test]
async fn missing_upload_is_served_as_not_found() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    let response = portal.get("/uploads/does_not_exist.png", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn language_reselection_clears_entered_state() {
    let portal = TestPortal::new();
    let cookie = portal.start("en").await;

    portal
        .post_form("/step/2", &cookie, "name=Test+User&action=next")
        .await;

    // picking a language again resets the form in the same session
    let response = portal
        .post_form("/set-language", &cookie, "lang=ji")
        .await;
    assert_eq!(location_of(&response), "/step/2");

    let html = body_text(portal.get("/step/2", &cookie).await).await;
    assert!(!html.contains("Test User"));
}
