//! HTTP API.
//!
//! ## GET /menu?nativeLanguage=<id>
//! Menu text in the caller's native language: `{"menu": "..."}`.
//!
//! ## POST /action
//! One chat turn. Body:
//! ```json
//! {"user_input": "hola", "current_language": "english", "nativeLanguage": "español"}
//! ```
//! Response: `{"response": "...", "new_language": "english"}`.
//!
//! ## GET /translations?word=<w>
//! Every target-language rendering of a source phrase.
//!
//! ## GET /dialect?phrase=<p>&dialect=<d>
//! Phrase alternatives in the other English dialects.
//!
//! ## GET /health

use crate::chat::{get_menu, process_chat_input, ChatContext, ChatReply};
use crate::config::TalkieConfig;
use crate::core::dialect::dialect_alternatives;
use crate::core::engine::TranslatorEngine;
use crate::core::types::{Dialect, Language};
use crate::error::TalkieError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

/// Shared server state. The mutex serializes chat turns so that teaching
/// (check then insert) never interleaves with another request.
struct AppState {
    engine: Mutex<TranslatorEngine>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn bad_request(message: impl Into<String>) -> ApiError {
    let error = message.into();
    warn!(%error, "rejected request");
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

impl AppState {
    fn engine(&self) -> Result<MutexGuard<'_, TranslatorEngine>, ApiError> {
        self.engine.lock().map_err(|_| {
            error!("translator engine lock poisoned");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Estado interno no disponible".to_string(),
                }),
            )
        })
    }
}

#[derive(Debug, Deserialize)]
struct MenuQuery {
    #[serde(rename = "nativeLanguage")]
    native_language: Option<String>,
}

#[derive(Debug, Serialize)]
struct MenuResponse {
    menu: &'static str,
}

#[derive(Debug, Deserialize)]
struct ActionRequest {
    user_input: Option<String>,
    current_language: Option<String>,
    #[serde(rename = "nativeLanguage")]
    native_language: Option<String>,
    dialect: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslationsQuery {
    word: Option<String>,
}

#[derive(Debug, Serialize)]
struct TranslationsResponse {
    word: String,
    translations: IndexMap<Language, String>,
}

#[derive(Debug, Deserialize)]
struct DialectQuery {
    phrase: String,
    dialect: Option<String>,
}

#[derive(Debug, Serialize)]
struct DialectResponse {
    alternatives: Option<BTreeMap<Dialect, &'static str>>,
}

/// Builds the API router around `engine`.
pub fn app(engine: TranslatorEngine) -> Router {
    let state = Arc::new(AppState {
        engine: Mutex::new(engine),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/menu", get(menu))
        .route("/action", post(action))
        .route("/translations", get(translations))
        .route("/dialect", get(dialect))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(config: &TalkieConfig, engine: TranslatorEngine) -> Result<(), TalkieError> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Talkie API listening on http://{}", addr);
    axum::serve(listener, app(engine)).await?;
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn menu(Query(query): Query<MenuQuery>) -> Json<MenuResponse> {
    let native = query.native_language.as_deref().unwrap_or("english");
    Json(MenuResponse {
        menu: get_menu(native),
    })
}

async fn action(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let (Some(user_input), Some(current_language)) = (
        request.user_input.filter(|s| !s.is_empty()),
        request.current_language.filter(|s| !s.is_empty()),
    ) else {
        return Err(bad_request("Faltan parámetros"));
    };

    let language = Language::from_alias(&current_language)
        .map_err(|_| bad_request(format!("Idioma no soportado: {current_language}")))?;
    let dialect = match request.dialect.as_deref() {
        Some(id) => id
            .parse::<Dialect>()
            .map_err(|_| bad_request(format!("Dialecto no soportado: {id}")))?,
        None => Dialect::default(),
    };
    let native = Language::from_native(request.native_language.as_deref().unwrap_or("english"));

    let context = ChatContext::new(language)
        .with_native(native)
        .with_dialect(dialect);
    let mut engine = state.engine()?;
    Ok(Json(process_chat_input(&mut engine, context, &user_input)))
}

async fn translations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TranslationsQuery>,
) -> Result<Json<TranslationsResponse>, ApiError> {
    let Some(word) = query.word.filter(|w| !w.is_empty()) else {
        return Err(bad_request("Faltan parámetros"));
    };
    let translations = state.engine()?.translate_all(&word);
    Ok(Json(TranslationsResponse { word, translations }))
}

async fn dialect(Query(query): Query<DialectQuery>) -> Result<Json<DialectResponse>, ApiError> {
    let current = match query.dialect.as_deref() {
        Some(id) => id
            .parse::<Dialect>()
            .map_err(|_| bad_request(format!("Dialecto no soportado: {id}")))?,
        None => Dialect::default(),
    };
    Ok(Json(DialectResponse {
        alternatives: dialect_alternatives(&query.phrase, current),
    }))
}
