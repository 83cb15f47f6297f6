use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use principles_core::db::open_db;
use principles_web::{build_router, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

const ABC: &str = "INSERT INTO principles (id, title, description) VALUES
    (1, 'A', 'first'),
    (2, 'B', 'second'),
    (3, 'C', 'third');";

struct TestApp {
    _dir: TempDir,
    router: Router,
}

impl TestApp {
    fn seeded(sql: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("principles.db");
        let conn = open_db(&db_path).unwrap();
        conn.execute_batch(sql).unwrap();
        drop(conn);

        let stylesheet_path = dir.path().join("style.css");
        std::fs::write(&stylesheet_path, "body { color: black; }").unwrap();

        let router = build_router(AppState {
            db_path,
            stylesheet_path,
        });
        Self { _dir: dir, router }
    }

    async fn get(&self, uri: &str) -> (StatusCode, String, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

#[tokio::test]
async fn landing_page_lists_categories() {
    let app = TestApp::seeded("INSERT INTO categories (id, name) VALUES (1, 'Craft');");

    let (status, content_type, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains(r#"<a href="/category?id=1">Craft</a>"#));
}

#[tokio::test]
async fn principle_page_renders_neighbors_and_category() {
    let app = TestApp::seeded(ABC);

    let (status, content_type, body) = app.get("/principle?id=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("<h1>B</h1>"));
    assert!(body.contains("Uncategorized"));
    assert!(body.contains(r#"href="/principle?id=1""#));
    assert!(body.contains(r#"href="/principle?id=3""#));
    assert!(body.contains("No related principles."));
}

#[tokio::test]
async fn first_principle_hides_previous_link() {
    let app = TestApp::seeded(ABC);

    let (status, _, body) = app.get("/principle?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains(r#"class="previous""#));
    assert!(body.contains(r#"class="next" href="/principle?id=2""#));
}

#[tokio::test]
async fn principle_without_id_matches_lowest_identifier() {
    let app = TestApp::seeded(ABC);

    let (_, _, defaulted) = app.get("/principle").await;
    let (_, _, explicit) = app.get("/principle?id=1").await;
    assert_eq!(defaulted, explicit);

    let (_, _, empty_param) = app.get("/principle?id=").await;
    assert_eq!(empty_param, explicit);
}

#[tokio::test]
async fn linked_principles_show_on_both_pages() {
    let app = TestApp::seeded(&format!(
        "{ABC}
         INSERT INTO principle_links (principle_id, related_id, relation_type) VALUES (1, 3, '');"
    ));

    let (_, _, first) = app.get("/principle?id=1").await;
    assert!(first.contains(r#"<a href="/principle?id=3">C</a>"#));

    let (_, _, third) = app.get("/principle?id=3").await;
    assert!(third.contains(r#"<a href="/principle?id=1">A</a>"#));

    let (_, _, second) = app.get("/principle?id=2").await;
    assert!(second.contains("No related principles."));
}

#[tokio::test]
async fn description_markup_is_rendered_and_title_is_escaped() {
    let app = TestApp::seeded(
        "INSERT INTO principles (id, title, description)
         VALUES (1, '<b>Bold</b>', 'Use <em>emphasis</em>');",
    );

    let (_, _, body) = app.get("/principle?id=1").await;
    assert!(body.contains("Use <em>emphasis</em>"));
    assert!(!body.contains("<h1><b>Bold</b></h1>"));
}

#[tokio::test]
async fn malformed_principle_ids_are_bad_requests() {
    let app = TestApp::seeded(ABC);

    for uri in ["/principle?id=0", "/principle?id=-1", "/principle?id=abc"] {
        let (status, content_type, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(content_type.starts_with("text/plain"), "{uri}");
        assert_eq!(body, "Invalid ID");
    }
}

#[tokio::test]
async fn unknown_principle_is_not_found() {
    let app = TestApp::seeded(ABC);

    let (status, _, body) = app.get("/principle?id=999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Principle not found");
}

#[tokio::test]
async fn empty_catalogue_default_principle_is_not_found() {
    let app = TestApp::seeded("");

    let (status, _, _) = app.get("/principle").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_page_lists_its_principles() {
    let app = TestApp::seeded(
        "INSERT INTO categories (id, name) VALUES (1, 'Craft'), (2, 'Teamwork');
         INSERT INTO principles (id, title, description, category_id) VALUES
            (1, 'A', 'first', 1),
            (2, 'B', 'second', 2);",
    );

    let (status, content_type, body) = app.get("/category?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("<h1>Craft</h1>"));
    assert!(body.contains(r#"<a href="/principle?id=1">A</a>"#));
    assert!(!body.contains(r#"<a href="/principle?id=2">B</a>"#));
    assert!(body.contains(r#"<a href="/category?id=2">Teamwork</a>"#));
}

#[tokio::test]
async fn category_requires_a_valid_id() {
    let app = TestApp::seeded("INSERT INTO categories (id, name) VALUES (1, 'Craft');");

    for uri in ["/category", "/category?id=", "/category?id=0", "/category?id=x"] {
        let (status, _, _) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }

    let (status, _, body) = app.get("/category?id=7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Category not found");
}

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let app = TestApp::seeded("");

    let (status, content_type, body) = app.get("/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/css"));
    assert_eq!(body, "body { color: black; }");
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn unopenable_store_is_a_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let router = build_router(AppState {
        db_path: dir.path().join("missing").join("principles.db"),
        stylesheet_path: dir.path().join("style.css"),
    });

    let status = status_of(router, "/principle?id=1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn missing_store_file_is_a_server_error_and_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("typo.db");
    let router = build_router(AppState {
        db_path: db_path.clone(),
        stylesheet_path: dir.path().join("style.css"),
    });

    for uri in ["/", "/principle", "/category?id=1"] {
        let status = status_of(router.clone(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    }
    assert!(!db_path.exists());
}
