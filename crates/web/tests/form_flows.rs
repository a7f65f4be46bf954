use std::sync::Arc;

use reqwest::{StatusCode, redirect::Policy};

use comptoir_core::EmailAddress;
use comptoir_infra::{
    InMemoryProductStore, InMemoryReclamationStore, ProductStore, ReclamationStore,
};
use comptoir_mail::MemoryMailer;
use comptoir_web::app::{build_app, services::AppServices, templates};

struct TestServer {
    base_url: String,
    reclamations: Arc<InMemoryReclamationStore>,
    products: Arc<InMemoryProductStore>,
    mailer: Arc<MemoryMailer>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with_mailer(MemoryMailer::new()).await
    }

    async fn spawn_with_mailer(mailer: MemoryMailer) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        // The store and mailer handles stay around for direct inspection.
        let reclamations = Arc::new(InMemoryReclamationStore::new());
        let products = Arc::new(InMemoryProductStore::new());
        let mailer = Arc::new(mailer);

        let services = Arc::new(AppServices {
            reclamations: reclamations.clone(),
            products: products.clone(),
            mailer: mailer.clone(),
            admin_email: EmailAddress::parse("sav@comptoir.example").unwrap(),
            templates: templates::build_templates().unwrap(),
        });

        let app = build_app(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            reclamations,
            products,
            mailer,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Client that surfaces redirects instead of following them.
fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap()
}

fn location(res: &reqwest::Response) -> &str {
    res.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn health_responds_ok() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_pages_render_without_side_effects() {
    let srv = TestServer::spawn().await;
    let client = no_redirect_client();

    let pages = [
        "/",
        "/support/add",
        "/support/contact",
        "/support/",
        "/catalog/add",
        "/catalog/",
    ];
    for path in pages {
        let res = client
            .get(format!("{}{}", srv.base_url, path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "GET {} should render", path);
    }

    assert!(srv.reclamations.list_recent().await.unwrap().is_empty());
    assert!(srv.products.list().await.unwrap().is_empty());
    assert!(srv.mailer.sent().is_empty());
}

#[tokio::test]
async fn valid_reclamation_is_stored_and_no_mail_goes_out() {
    let srv = TestServer::spawn().await;
    let client = no_redirect_client();

    let res = client
        .post(format!("{}/support/add", srv.base_url))
        .form(&[
            ("email", "client@example.com"),
            ("message", "The delivered unit arrived damaged."),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/support/add");

    let stored = srv.reclamations.list_recent().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "client@example.com");
    assert_eq!(stored[0].message, "The delivered unit arrived damaged.");
    assert!(srv.mailer.sent().is_empty());
}

#[tokio::test]
async fn contact_mails_the_admin_and_stores_nothing() {
    let srv = TestServer::spawn().await;
    let client = no_redirect_client();

    let res = client
        .post(format!("{}/support/contact", srv.base_url))
        .form(&[
            ("email", "client@example.com"),
            ("message", "Nobody answered my previous reclamation."),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/support/contact");

    let sent = srv.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Reclamation from client@example.com");
    assert_eq!(sent[0].body, "Nobody answered my previous reclamation.");
    assert_eq!(sent[0].from.as_str(), "client@example.com");
    assert_eq!(sent[0].to.as_str(), "sav@comptoir.example");
    assert!(srv.reclamations.list_recent().await.unwrap().is_empty());
}

#[tokio::test]
async fn short_message_rerenders_with_error_and_no_side_effects() {
    let srv = TestServer::spawn().await;
    let client = no_redirect_client();

    for path in ["/support/add", "/support/contact"] {
        let res = client
            .post(format!("{}{}", srv.base_url, path))
            .form(&[("email", "client@example.com"), ("message", "Too short")])
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK, "POST {} should re-render", path);
        let body = res.text().await.unwrap();
        assert!(body.contains("Ensure this value has at least 10 characters (it has 9)."));
        assert!(body.contains("Too short"), "input should be preserved");
        assert!(body.contains("client@example.com"), "input should be preserved");
    }

    assert!(srv.reclamations.list_recent().await.unwrap().is_empty());
    assert!(srv.mailer.sent().is_empty());
}

#[tokio::test]
async fn malformed_email_and_short_message_report_together() {
    let srv = TestServer::spawn().await;
    let client = no_redirect_client();

    let res = client
        .post(format!("{}/support/add", srv.base_url))
        .form(&[("email", "not-an-address"), ("message", "Too short")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Enter a valid email address."));
    assert!(body.contains("Ensure this value has at least 10 characters (it has 9)."));
    assert!(srv.reclamations.list_recent().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_fields_come_back_as_required_errors() {
    let srv = TestServer::spawn().await;
    let client = no_redirect_client();

    let res = client
        .post(format!("{}/support/add", srv.base_url))
        .form(&Vec::<(&str, &str)>::new())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert_eq!(body.matches("This field is required.").count(), 2);
    assert!(srv.reclamations.list_recent().await.unwrap().is_empty());
}

#[tokio::test]
async fn mail_failure_surfaces_as_server_error() {
    let srv = TestServer::spawn_with_mailer(MemoryMailer::failing("connection refused")).await;
    let client = no_redirect_client();

    let res = client
        .post(format!("{}/support/contact", srv.base_url))
        .form(&[
            ("email", "client@example.com"),
            ("message", "The delivered unit arrived damaged."),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(srv.reclamations.list_recent().await.unwrap().is_empty());
}

#[tokio::test]
async fn flash_confirmation_shows_once_then_disappears() {
    let srv = TestServer::spawn().await;
    // Cookie-keeping client that follows the 303 like a browser would.
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap();

    let res = client
        .post(format!("{}/support/contact", srv.base_url))
        .form(&[
            ("email", "client@example.com"),
            ("message", "Nobody answered my previous reclamation."),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Your complaint has been sent."));

    let res = client
        .get(format!("{}/support/contact", srv.base_url))
        .send()
        .await
        .unwrap();
    let body = res.text().await.unwrap();
    assert!(!body.contains("Your complaint has been sent."));
}

#[tokio::test]
async fn valid_product_stores_only_record_fields() {
    let srv = TestServer::spawn().await;
    let client = no_redirect_client();

    let res = client
        .post(format!("{}/catalog/add", srv.base_url))
        .form(&[
            ("name", "Wireless Headphones"),
            ("price", "129.99"),
            ("stock", "25"),
            ("notify_on_low_stock", "on"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/catalog/add");

    let stored = srv.products.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Wireless Headphones");
    assert_eq!(stored[0].price.to_string(), "129.99");
    assert_eq!(stored[0].stock, 25);
    assert!(srv.mailer.sent().is_empty());
}

#[tokio::test]
async fn product_rejects_non_numeric_price_and_stock() {
    let srv = TestServer::spawn().await;
    let client = no_redirect_client();

    let res = client
        .post(format!("{}/catalog/add", srv.base_url))
        .form(&[
            ("name", "Wireless Headphones"),
            ("price", "abc"),
            ("stock", "2.5"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Enter a number."));
    assert!(body.contains("Enter a whole number."));
    assert!(srv.products.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn reclamation_list_is_newest_first() {
    let srv = TestServer::spawn().await;
    let client = no_redirect_client();

    let messages = [
        "First complaint with enough text.",
        "Second complaint with enough text.",
    ];
    for message in messages {
        let res = client
            .post(format!("{}/support/add", srv.base_url))
            .form(&[("email", "client@example.com"), ("message", message)])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }

    let res = client
        .get(format!("{}/support/", srv.base_url))
        .send()
        .await
        .unwrap();
    let body = res.text().await.unwrap();
    let first = body.find(messages[0]).unwrap();
    let second = body.find(messages[1]).unwrap();
    assert!(second < first, "newest reclamation should render first");
}
