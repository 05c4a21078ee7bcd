#![cfg(feature = "server")]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::routing::post;
use http_body_util::BodyExt;
use tower::ServiceExt;

use viescheck::server::{AppState, router};
use viescheck::vies::ViesClient;

const VALID_RESPONSE: &str = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <checkVatResponse xmlns="urn:ec.europa.eu:taxud:vies:services:checkVat:types">
      <countryCode>PL</countryCode>
      <vatNumber>1234567890</vatNumber>
      <requestDate>2026-08-07+02:00</requestDate>
      <valid>true</valid>
      <name>Test Sp. z o.o.</name>
      <address>ul. Testowa 1, 00-001 Warszawa</address>
    </checkVatResponse>
  </soap:Body>
</soap:Envelope>"#;

const INVALID_RESPONSE: &str = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <checkVatResponse>
      <valid>false</valid>
      <name>---</name>
      <address>---</address>
    </checkVatResponse>
  </soap:Body>
</soap:Envelope>"#;

/// Bind a stub VIES endpoint answering every POST with `body`.
async fn spawn_stub(body: &'static str) -> String {
    let app = Router::new().route("/", post(move || async move { body }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

/// A loopback address that refuses connections.
async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

fn app_for(endpoint: &str, timeout: Duration) -> Router {
    let client = ViesClient::new(endpoint, timeout).unwrap();
    router(Arc::new(AppState { client }))
}

async fn post_form(app: Router, body: &'static str) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/check-vat")
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn valid_number_yields_pdf_attachment() {
    let endpoint = spawn_stub(VALID_RESPONSE).await;
    let app = app_for(&endpoint, Duration::from_secs(5));

    // Separators in the submitted number exercise normalization end-to-end.
    let response = post_form(app, "country_code=PL&vat_number=123-456-78-90").await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"VIES_PL_1234567890_Test-Sp-z-oo.pdf\""
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_EXPOSE_HEADERS],
        "Content-Disposition"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn inactive_number_yields_json_message() {
    let endpoint = spawn_stub(INVALID_RESPONSE).await;
    let app = app_for(&endpoint, Duration::from_secs(5));

    let response = post_form(app, "country_code=PL&vat_number=1234567890").await;
    assert_eq!(response.status(), 200);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    let body = json_body(response).await;
    assert_eq!(body["message"], "VAT number is not active");
}

#[tokio::test]
async fn undeterminable_response_yields_json_message() {
    let endpoint = spawn_stub("<totally-unexpected/>").await;
    let app = app_for(&endpoint, Duration::from_secs(5));

    let response = post_form(app, "country_code=PL&vat_number=1234567890").await;
    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Could not determine VAT number status");
}

#[tokio::test]
async fn unreachable_upstream_is_not_a_server_fault() {
    let endpoint = dead_endpoint().await;
    let app = app_for(&endpoint, Duration::from_secs(1));

    let response = post_form(app, "country_code=PL&vat_number=1234567890").await;
    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Could not verify VAT number"), "{message}");
}

#[tokio::test]
async fn slow_upstream_times_out_to_json() {
    let app_stub = Router::new().route(
        "/",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            "too late"
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app_stub).await.unwrap();
    });

    let app = app_for(&format!("http://{addr}/"), Duration::from_millis(250));
    let response = post_form(app, "country_code=PL&vat_number=1234567890").await;
    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Could not verify VAT number")
    );
}

#[tokio::test]
async fn bad_country_code_never_reaches_the_network() {
    // A dead endpoint with a long timeout: if the handler tried the
    // network, this test would stall instead of answering instantly.
    let endpoint = dead_endpoint().await;
    let app = app_for(&endpoint, Duration::from_secs(30));

    let response = post_form(app, "country_code=Z9&vat_number=123").await;
    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("invalid country code")
    );
}

#[tokio::test]
async fn empty_vat_number_rejected() {
    let endpoint = dead_endpoint().await;
    let app = app_for(&endpoint, Duration::from_secs(30));

    let response = post_form(app, "country_code=PL&vat_number=---").await;
    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Could not verify VAT number")
    );
}

#[tokio::test]
async fn missing_form_field_is_a_client_error() {
    let endpoint = dead_endpoint().await;
    let app = app_for(&endpoint, Duration::from_secs(1));

    let response = post_form(app, "country_code=PL").await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn form_page_served_at_root() {
    let endpoint = dead_endpoint().await;
    let app = app_for(&endpoint, Duration::from_secs(1));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = std::str::from_utf8(&bytes).unwrap();
    assert!(page.contains("name=\"country_code\""));
    assert!(page.contains("name=\"vat_number\""));
    assert!(page.contains("action=\"/check-vat\""));
}

#[tokio::test]
async fn health_endpoint() {
    let endpoint = dead_endpoint().await;
    let app = app_for(&endpoint, Duration::from_secs(1));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);
}
