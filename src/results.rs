// src/results.rs
//
// Typed schema for result.json plus the one-shot fetch that loads it. The
// document is the game server's periodic score dump: two per-player maps we
// render, plus aggregate keys we ignore.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::leaderboard::ScoreBoard;

/// Top-level shape of result.json. Unknown keys (the server also writes
/// blue_total / pink_total) are skipped; a missing team map means that team
/// has no players yet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultsDocument {
    #[serde(default)]
    pub personal_pink: ScoreBoard,
    #[serde(default)]
    pub personal_blue: ScoreBoard,
}

/// Why the page never reached Ready. One terminal value per page load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Network failure or non-2xx status.
    Fetch(String),
    /// Body is not JSON at all.
    Parse(String),
    /// Body is JSON but not a results document.
    Schema(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Fetch(e) => write!(f, "fetch failed: {e}"),
            LoadError::Parse(e) => write!(f, "result.json is not valid JSON: {e}"),
            LoadError::Schema(e) => write!(f, "result.json has the wrong shape: {e}"),
        }
    }
}

/// Parse and validate a results body. Syntax trouble is a Parse error; shape
/// trouble (wrong types, negative scores) is a Schema error.
pub fn parse_results(body: &str) -> Result<ResultsDocument, LoadError> {
    let doc: ResultsDocument = serde_json::from_str(body).map_err(|e| match e.classify() {
        serde_json::error::Category::Data => LoadError::Schema(e.to_string()),
        _ => LoadError::Parse(e.to_string()),
    })?;
    for (team, board) in [
        ("personal_pink", &doc.personal_pink),
        ("personal_blue", &doc.personal_blue),
    ] {
        if let Some((player, score)) = board.iter().find(|(_, s)| **s < 0.0) {
            return Err(LoadError::Schema(format!(
                "{team}.{player} is negative ({score})"
            )));
        }
    }
    Ok(doc)
}

/// One-shot GET of the results document. Exactly two outcomes: the parsed
/// document, or the error that puts the page in its failed state.
pub async fn fetch_results(url: &str) -> Result<ResultsDocument, LoadError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))?;
    if !resp.ok() {
        return Err(LoadError::Fetch(format!("HTTP {}", resp.status())));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))?;
    parse_results(&body)
}
