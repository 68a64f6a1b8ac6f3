//! End-to-end tests for the contact endpoint.
//!
//! Each test binds the router to an ephemeral port and talks to it over real
//! HTTP, either through the crate's client or with raw `ureq` requests.

use contact_form::server::{self, AppState};
use contact_form::{
    AsyncContactClientImpl, Category, ContactClient, SubmissionForm, SubmissionPayload,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    state: AppState,
    _shutdown: oneshot::Sender<()>,
}

async fn start_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::default();
    let (tx, rx) = oneshot::channel::<()>();

    let serve_state = state.clone();
    tokio::spawn(async move {
        let _ = server::serve(listener, serve_state, async {
            let _ = rx.await;
        })
        .await;
    });

    TestServer {
        base_url: format!("http://{}", addr),
        state,
        _shutdown: tx,
    }
}

/// POST a raw body and return status and body text.
async fn post_raw(base_url: &str, body: &'static str) -> (u16, String) {
    let url = format!("{}/api/contacts", base_url);
    tokio::task::spawn_blocking(move || {
        let result = ureq::post(&url)
            .set("Content-Type", "application/json")
            .send_string(body);
        match result {
            Ok(resp) => (resp.status(), resp.into_string().unwrap()),
            Err(ureq::Error::Status(code, resp)) => (code, resp.into_string().unwrap()),
            Err(e) => panic!("transport error: {}", e),
        }
    })
    .await
    .unwrap()
}

fn message_of(body: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    value["message"].as_str().unwrap().to_string()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_name_and_email_are_echoed() {
    let server = start_server().await;
    let pairs = [
        ("佐藤", "a@b.com"),
        ("John Doe", "john@example.com"),
        ("", ""),
        ("O'Brien <x>", "weird+tag@example.co.jp"),
    ];

    for (name, email) in pairs {
        let client = ContactClient::with_base_url(server.base_url.clone());
        let payload = SubmissionPayload {
            name: name.to_string(),
            email: email.to_string(),
        };
        let confirmation = tokio::task::spawn_blocking(move || client.submit(&payload))
            .await
            .unwrap()
            .unwrap();

        assert!(confirmation
            .message
            .starts_with(&format!("{}さん、ありがとうございます！", name)));
        assert!(confirmation.message.contains(&format!("メール({})", email)));
    }

    assert_eq!(server.state.metrics.contacts_received_total(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_full_request_renders_template() {
    let server = start_server().await;
    let (status, body) = post_raw(
        &server.base_url,
        r#"{"name":"佐藤","email":"a@b.com","confirmEmail":"a@b.com","tel1":"090","tel2":"1234","tel3":"5678","category":"商品","message":"質問"}"#,
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        message_of(&body),
        "佐藤さん、ありがとうございます！\n  メール(a@b.com)\n  電話番号(090-1234-5678)\n  お問い合わせ種別(商品)\n  お問い合わせ内容(質問)\n  を受け取りました。"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_fields_render_empty() {
    let server = start_server().await;
    let (status, body) = post_raw(&server.base_url, r#"{"name":"佐藤","email":"a@b.com"}"#).await;

    assert_eq!(status, 200);
    let message = message_of(&body);
    assert!(message.contains("電話番号(--)"));
    assert!(message.contains("お問い合わせ種別()"));
    assert!(message.contains("お問い合わせ内容()"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_malformed_body_does_not_take_down_server() {
    let server = start_server().await;

    let (status, body) = post_raw(&server.base_url, "{\"name\": ").await;
    assert_eq!(status, 400);
    assert_eq!(message_of(&body), server::MALFORMED_BODY_MESSAGE);

    let (status, _) = post_raw(&server.base_url, "null").await;
    assert_eq!(status, 200);

    let (status, _) = post_raw(&server.base_url, r#"{"name":"still up"}"#).await;
    assert_eq!(status, 200);
    assert_eq!(server.state.metrics.malformed_requests_total(), 1);
    assert_eq!(server.state.metrics.contacts_received_total(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_get_is_not_allowed() {
    let server = start_server().await;
    let url = format!("{}/api/contacts", server.base_url);

    let status = tokio::task::spawn_blocking(move || match ureq::get(&url).call() {
        Ok(resp) => resp.status(),
        Err(ureq::Error::Status(code, _)) => code,
        Err(e) => panic!("transport error: {}", e),
    })
    .await
    .unwrap();

    assert_eq!(status, 405);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_collected_but_not_transmitted_fields() {
    let server = start_server().await;
    let client = AsyncContactClientImpl::new(ContactClient::with_base_url(server.base_url.clone()));
    let mut form = SubmissionForm::new(Arc::new(client));

    {
        let draft = form.draft_mut();
        draft.set_name("佐藤");
        draft.set_email("a@b.com");
        draft.set_tel1("090");
        draft.set_tel2("1234");
        draft.set_tel3("5678");
        draft.select_category(Category::A);
        draft.set_message("質問");
    }

    // The preview shows everything that was collected
    let preview = form.preview();
    assert_eq!(preview.value("電話番号"), Some("090-1234-5678"));
    assert_eq!(preview.value("お問い合わせ種別"), Some("商品"));

    form.submit().wait().await.unwrap();

    // The confirmation only reflects what was transmitted
    let result = form.result().unwrap();
    assert!(result.contains("佐藤さん、ありがとうございます！"));
    assert!(result.contains("メール(a@b.com)"));
    assert!(result.contains("電話番号(--)"));
    assert!(result.contains("お問い合わせ種別()"));
    assert!(result.contains("お問い合わせ内容()"));
}
