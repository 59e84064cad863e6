//! End-to-end tests for the HTTP surface, driven through `tower::oneshot`
//! against an in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use medvoy_api::{AppState, build_router};
use medvoy_auth::{AuthConfig, StaticTokenValidator};
use medvoy_content::seo::LandingCatalog;
use medvoy_core::service::ServiceState;
use medvoy_directory::Directory;
use medvoy_store::{ClinicDraft, ClinicStore, MemoryStore, PostFrontmatter};

const OWNER_TOKEN: &str = "tok_owner";
const INTRUDER_TOKEN: &str = "tok_intruder";

const POST_MD: &str = r#"Intro prose.

## What It Costs

<!-- cost-table -->
| Procedure | UK Price | Abroad Price | Savings |
|-----------|----------|--------------|---------|
| Veneers * | £6,000 | £2,100 | 65% |
<!-- /cost-table -->

## Planning

<!-- checklist -->
- Passport
<!-- /checklist -->

## Frequently Asked Questions

### Is it safe?

Accredited clinics follow the same standards.

## Final Thoughts

Do your research.
"#;

async fn app() -> (Router, MemoryStore) {
    let store = MemoryStore::new();

    let fm = PostFrontmatter {
        title: "Veneers in Turkey".to_string(),
        excerpt: "Costs and planning.".to_string(),
        ..Default::default()
    };
    store
        .insert_post(fm.into_post("veneers-in-turkey".to_string(), POST_MD.to_string()))
        .await;

    let state = AppState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Directory::default(),
        LandingCatalog {
            procedures: vec!["Dental Implants".to_string()],
            destinations: vec!["Turkey".to_string()],
        },
    );
    state.health.set_state(ServiceState::Ready);

    let validator = Arc::new(
        StaticTokenValidator::new()
            .with_token(OWNER_TOKEN, "sub_owner", "owner@example.com")
            .with_token(INTRUDER_TOKEN, "sub_intruder", "intruder@example.com"),
    );

    let router = build_router(state, validator, AuthConfig { enabled: true }, None);
    (router, store)
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value, String) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8_lossy(&bytes).to_string();
    let json = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
    (status, json, text)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn authed_json(method: &str, uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn clinic_draft() -> serde_json::Value {
    serde_json::json!({
        "name": "Smile Istanbul",
        "city": "Istanbul",
        "country": "Turkey",
        "procedures": ["Dental Implants"],
        "description": "Accredited dental clinic.",
        "accreditations": ["JCI"],
    })
}

fn multipart_request(
    uri: &str,
    token: &str,
    content_type: &str,
    bytes: &[u8],
) -> Request<Body> {
    let boundary = "MedvoyTestBoundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"file\"; filename=\"photo\"\r\n",
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"caption\"\r\n\r\nLobby\r\n");
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

// ============================================================================
// Public pages
// ============================================================================

#[tokio::test]
async fn test_health_reports_ready() {
    let (router, _) = app().await;
    let (status, json, _) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ready");
}

#[tokio::test]
async fn test_blog_post_page_renders_pipeline_output() {
    let (router, _) = app().await;
    let (status, _, html) = send(&router, get("/blog/veneers-in-turkey")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Veneers in Turkey</title>"));
    assert!(html.contains(r#"id="what-it-costs""#));
    assert!(html.contains("class=\"cta\""));
    assert!(html.contains("class=\"cost-table\""));
    assert!(html.contains("<li>Passport</li>"));
    // FAQ renders as the structured component, not the article section
    assert!(!html.contains(r#"id="frequently-asked-questions""#));
    assert!(html.contains("FAQPage"));
}

#[tokio::test]
async fn test_blog_post_unknown_slug_is_404() {
    let (router, _) = app().await;
    let (status, json, _) = send(&router, get("/blog/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["category"], "not_found");
}

#[tokio::test]
async fn test_blog_index_lists_posts() {
    let (router, _) = app().await;
    let (status, _, html) = send(&router, get("/blog")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/blog/veneers-in-turkey"));
}

#[tokio::test]
async fn test_landing_page_known_and_unknown() {
    let (router, _) = app().await;

    let (status, _, html) = send(&router, get("/go/dental-implants/turkey")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Dental Implants in Turkey"));
    assert!(html.contains("MedicalWebPage"));

    let (status, _, _) = send(&router, get("/go/hair-transplant/turkey")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_directory_search_filters() {
    let (router, store) = app().await;
    store
        .create_clinic(
            "sub_owner",
            ClinicDraft {
                name: "Smile Istanbul".to_string(),
                city: "Istanbul".to_string(),
                country: "Turkey".to_string(),
                procedures: vec!["Dental Implants".to_string()],
                description: String::new(),
                accreditations: vec![],
            },
        )
        .await
        .unwrap();

    let (status, json, _) = send(&router, get("/clinics?procedure=dental-implants")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["clinic"]["name"], "Smile Istanbul");

    let (_, json, _) = send(&router, get("/clinics?country=spain")).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ============================================================================
// Dashboard CRUD
// ============================================================================

#[tokio::test]
async fn test_create_requires_auth() {
    let (router, _) = app().await;
    let req = Request::builder()
        .method("POST")
        .uri("/api/clinic")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(clinic_draft().to_string()))
        .unwrap();
    let (status, json, _) = send(&router, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["category"], "authentication");
}

#[tokio::test]
async fn test_clinic_crud_lifecycle() {
    let (router, _) = app().await;

    let (status, clinic, _) = send(
        &router,
        authed_json("POST", "/api/clinic", OWNER_TOKEN, clinic_draft()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(clinic["owner"], "sub_owner");
    assert_eq!(clinic["slug"], "smile-istanbul");
    let id = clinic["id"].as_str().unwrap().to_string();

    // Non-owner mutation is forbidden
    let (status, json, _) = send(
        &router,
        authed_json("PUT", &format!("/api/clinic/{id}"), INTRUDER_TOKEN, clinic_draft()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["category"], "ownership");

    // Owner update works
    let mut renamed = clinic_draft();
    renamed["name"] = serde_json::json!("Smile Istanbul Dental");
    let (status, updated, _) = send(
        &router,
        authed_json("PUT", &format!("/api/clinic/{id}"), OWNER_TOKEN, renamed),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["slug"], "smile-istanbul-dental");

    // Delete, then further mutation is 404
    let (status, _, _) = send(
        &router,
        authed_json("DELETE", &format!("/api/clinic/{id}"), OWNER_TOKEN, serde_json::Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, _) = send(
        &router,
        authed_json("PUT", &format!("/api/clinic/{id}"), OWNER_TOKEN, clinic_draft()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let (router, _) = app().await;
    let mut draft = clinic_draft();
    draft["name"] = serde_json::json!("   ");
    let (status, json, _) = send(
        &router,
        authed_json("POST", "/api/clinic", OWNER_TOKEN, draft),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["category"], "invalid");
}

#[tokio::test]
async fn test_doctor_lifecycle() {
    let (router, _) = app().await;
    let (_, clinic, _) = send(
        &router,
        authed_json("POST", "/api/clinic", OWNER_TOKEN, clinic_draft()),
    )
    .await;
    let id = clinic["id"].as_str().unwrap().to_string();

    let draft = serde_json::json!({
        "name": "Dr. Aylin Demir",
        "title": "DDS",
        "specialties": ["Implantology"],
        "years_experience": 12,
    });
    let (status, doctor, _) = send(
        &router,
        authed_json("POST", &format!("/api/clinic/{id}/doctors"), OWNER_TOKEN, draft.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let doctor_id = doctor["id"].as_str().unwrap().to_string();

    let (status, renamed, _) = send(
        &router,
        authed_json(
            "PUT",
            &format!("/api/clinic/{id}/doctors/{doctor_id}"),
            OWNER_TOKEN,
            serde_json::json!({ "name": "Dr. A. Demir" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Dr. A. Demir");

    let (status, _, _) = send(
        &router,
        authed_json(
            "DELETE",
            &format!("/api/clinic/{id}/doctors/{doctor_id}"),
            OWNER_TOKEN,
            serde_json::Value::Null,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// ============================================================================
// Photo uploads
// ============================================================================

#[tokio::test]
async fn test_photo_upload_roundtrip() {
    let (router, store) = app().await;
    let (_, clinic, _) = send(
        &router,
        authed_json("POST", "/api/clinic", OWNER_TOKEN, clinic_draft()),
    )
    .await;
    let id = clinic["id"].as_str().unwrap().to_string();

    let req = multipart_request(
        &format!("/api/clinic/{id}/photos"),
        OWNER_TOKEN,
        "image/jpeg",
        &[0xFF, 0xD8, 0xFF, 0xE0],
    );
    let (status, photo, _) = send(&router, req).await;
    assert_eq!(status, StatusCode::CREATED);
    let url = photo["url"].as_str().unwrap();
    assert!(url.starts_with("/media/"));
    assert!(url.ends_with(".jpg"));
    assert_eq!(photo["caption"], "Lobby");
    assert_eq!(
        store.media_bytes(url).await,
        Some(vec![0xFF, 0xD8, 0xFF, 0xE0])
    );
}

#[tokio::test]
async fn test_photo_upload_rejects_oversize() {
    let (router, _) = app().await;
    let (_, clinic, _) = send(
        &router,
        authed_json("POST", "/api/clinic", OWNER_TOKEN, clinic_draft()),
    )
    .await;
    let id = clinic["id"].as_str().unwrap().to_string();

    let oversized = vec![0u8; 5 * 1024 * 1024 + 1];
    let req = multipart_request(
        &format!("/api/clinic/{id}/photos"),
        OWNER_TOKEN,
        "image/jpeg",
        &oversized,
    );
    let (status, json, _) = send(&router, req).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"]["category"], "upload");
}

#[tokio::test]
async fn test_photo_upload_rejects_non_image() {
    let (router, _) = app().await;
    let (_, clinic, _) = send(
        &router,
        authed_json("POST", "/api/clinic", OWNER_TOKEN, clinic_draft()),
    )
    .await;
    let id = clinic["id"].as_str().unwrap().to_string();

    let req = multipart_request(
        &format!("/api/clinic/{id}/photos"),
        OWNER_TOKEN,
        "application/pdf",
        b"%PDF-1.4",
    );
    let (status, json, _) = send(&router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["category"], "invalid");
}
