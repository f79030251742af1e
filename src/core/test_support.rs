//! Local stand-in for the translate endpoint, used by tests

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::core::config::TranslatorConfig;

/// One request as seen by the mock service
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub langpair: String,
    pub text: String,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    fail_pair: Option<String>,
}

pub struct MockService {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Replies `Bonjour` to `hello` in `en|fr`, and `<langpair>:<text>` to
/// anything else. The text `!no-result` and the pair `fail_pair` get a page
/// without a result box; `!server-error` gets a 500 and `!bad-utf8` a body
/// that is not UTF-8.
async fn translate_t(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let langpair = params.get("langpair").cloned().unwrap_or_default();
    let text = params.get("text").cloned().unwrap_or_default();
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    state.requests.lock().unwrap().push(RecordedRequest {
        langpair: langpair.clone(),
        text: text.clone(),
        user_agent,
    });

    if text == "!server-error" {
        return (StatusCode::INTERNAL_SERVER_ERROR, Html("oops".to_string())).into_response();
    }

    if text == "!bad-utf8" {
        return (StatusCode::OK, vec![0xff, 0xfe, b'<']).into_response();
    }

    if text == "!no-result" || state.fail_pair.as_deref() == Some(langpair.as_str()) {
        return (
            StatusCode::OK,
            Html("<html><body><p>We are not able to translate this.</p></body></html>".to_string()),
        )
            .into_response();
    }

    let result = if langpair == "en|fr" && text == "hello" {
        "Bonjour".to_string()
    } else {
        format!("{}:{}", langpair, text)
    };

    (
        StatusCode::OK,
        Html(format!(
            "<html><body><div>Translate</div>\n<div id=result_box dir=\"ltr\">{}</div>\n</body></html>",
            result
        )),
    )
        .into_response()
}

pub async fn spawn_mock_service(fail_pair: Option<&str>) -> MockService {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        requests: requests.clone(),
        fail_pair: fail_pair.map(|s| s.to_string()),
    };

    let app = Router::new()
        .route("/translate_t", get(translate_t))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockService {
        endpoint: format!("http://{}/translate_t", addr),
        requests,
    }
}

pub fn test_config(endpoint: &str, rate_control: bool) -> TranslatorConfig {
    TranslatorConfig {
        endpoint: endpoint.to_string(),
        rate_control,
        rate_delay_ms: 100,
        timeout_ms: 5000,
        ..Default::default()
    }
}
