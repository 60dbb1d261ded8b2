use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ref {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub label: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    pub name: String,
}

/// Body of `GET /api/v2`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiData {
    pub refs: Vec<Ref>,
    pub types: BTreeMap<String, String>,
    pub languages: Vec<Language>,
}

/// Body of a successful `GET /api/v2/documents/search`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub page: u32,
    pub results_size: u32,
    pub results: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

pub type Repository = Arc<ApiData>;

pub fn app() -> Router {
    let master = Ref {
        id: "master".to_string(),
        reference: Uuid::new_v4().simple().to_string(),
        label: "Master".to_string(),
        is_master_ref: true,
    };
    let repo: Repository = Arc::new(ApiData {
        refs: vec![master],
        types: BTreeMap::from([("page".to_string(), "Page".to_string())]),
        languages: vec![Language {
            id: "en-us".to_string(),
            name: "English - United States".to_string(),
        }],
    });
    Router::new()
        .route("/api/v2", get(api_data))
        .route("/api/v2/documents/search", get(search))
        .with_state(repo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn api_data(State(repo): State<Repository>) -> Json<ApiData> {
    Json((*repo).clone())
}

async fn search(
    State(repo): State<Repository>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorBody>)> {
    let reference = params.reference.ok_or_else(|| {
        error_body(StatusCode::BAD_REQUEST, "missing ref query parameter")
    })?;
    if !repo.refs.iter().any(|r| r.reference == reference) {
        return Err(error_body(StatusCode::NOT_FOUND, "unknown ref"));
    }
    Ok(Json(SearchResponse {
        page: 1,
        results_size: 0,
        results: Vec::new(),
    }))
}

fn error_body(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}
