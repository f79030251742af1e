//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::core::client::GoogleTranslator;
use crate::core::language::{direct_pairs, Language};
use crate::core::models::{LanguagePair, TranslationRequest};

/// Application state
///
/// Clones share the translator's client and rate limiter.
#[derive(Clone)]
pub struct AppState {
    translator: GoogleTranslator,
}

impl AppState {
    /// Wrap a translator for use by the handlers
    pub fn new(translator: GoogleTranslator) -> Self {
        Self { translator }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Languages list response
#[derive(Serialize)]
struct LanguagesResponse {
    languages: Vec<LanguageInfo>,
    direct_pairs: Vec<LanguagePair>,
    intermediate_language: String,
}

#[derive(Serialize)]
struct LanguageInfo {
    code: String,
    name: String,
}

/// Translation request
#[derive(Deserialize)]
pub struct TranslateRequest {
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// Texts to translate, one result each
    pub text_list: Vec<String>,
}

/// Translation response
#[derive(Serialize)]
pub struct TranslateResponse {
    /// One item per input text, in order
    pub translations: Vec<TranslationItem>,
}

/// Outcome for one input text
#[derive(Serialize)]
pub struct TranslationItem {
    /// Translation, or the original text if it failed
    pub text: String,
    /// Hops used for this text
    pub path: Vec<LanguagePair>,
    /// Failure message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Rate control state, used both ways
#[derive(Serialize, Deserialize)]
pub struct RateControl {
    /// Whether requests are throttled
    pub enabled: bool,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error description
#[derive(Serialize)]
pub struct ErrorDetail {
    /// Human-readable message
    pub message: String,
    /// Machine-readable code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Health check handler
async fn health_check() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Get languages handler
async fn get_languages(State(state): State<AppState>) -> axum::Json<LanguagesResponse> {
    let languages = Language::ALL
        .iter()
        .map(|lang| LanguageInfo {
            code: lang.code().to_string(),
            name: lang.name().to_string(),
        })
        .collect();

    axum::Json(LanguagesResponse {
        languages,
        direct_pairs: direct_pairs(),
        intermediate_language: state.translator.config().intermediate_language.clone(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<axum::Json<TranslateResponse>, (StatusCode, axum::Json<ErrorResponse>)> {
    if payload.text_list.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            axum::Json(ErrorResponse {
                error: ErrorDetail {
                    message: "text_list cannot be empty".to_string(),
                    code: Some("invalid_request".to_string()),
                },
            }),
        ));
    }

    let mut translations = Vec::new();
    for text in payload.text_list {
        let request = TranslationRequest::new(text.clone(), &payload.source_lang, &payload.target_lang);

        match state.translator.translate_request(&request).await {
            Ok(result) => {
                translations.push(TranslationItem {
                    text: result.translation,
                    path: result.path,
                    error: None,
                });
            }
            Err(e) => {
                warn!("Translation failed for '{}': {}", text, e);
                // Return original text on error
                translations.push(TranslationItem {
                    text,
                    path: state
                        .translator
                        .resolve_path(&payload.source_lang, &payload.target_lang),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Ok(axum::Json(TranslateResponse { translations }))
}

async fn get_rate_control(State(state): State<AppState>) -> axum::Json<RateControl> {
    axum::Json(RateControl {
        enabled: state.translator.is_using_rate_control(),
    })
}

async fn put_rate_control(
    State(state): State<AppState>,
    Json(payload): Json<RateControl>,
) -> axum::Json<RateControl> {
    state.translator.set_using_rate_control(payload.enabled);
    info!("Rate control set to {}", payload.enabled);
    axum::Json(RateControl {
        enabled: state.translator.is_using_rate_control(),
    })
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/languages", get(get_languages))
        .route("/translate", post(translate))
        .route("/rate-control", get(get_rate_control).put(put_rate_control))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, translator: GoogleTranslator) -> anyhow::Result<()> {
    let app = router(AppState::new(translator));

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
