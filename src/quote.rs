// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::time::Duration;

use log::debug;

/// Shown whenever the upstream quote API cannot produce a usable quote.
pub const FALLBACK_QUOTE: &str = "“Stay hungry, stay foolish.” — Steve Jobs";

/// Result of a quote fetch. Kept as an explicit outcome instead of a bare
/// string so tests can tell a real quote from the fallback path; only
/// `into_display_string` collapses it for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOutcome {
    Fetched(String),
    Fallback,
}

impl QuoteOutcome {
    pub fn into_display_string(self) -> String {
        match self {
            QuoteOutcome::Fetched(quote) => quote,
            QuoteOutcome::Fallback => FALLBACK_QUOTE.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, QuoteOutcome::Fallback)
    }
}

#[derive(Debug)]
enum QuoteFetchError {
    Request(String),
    Upstream(String),
    Payload(String),
}

impl std::fmt::Display for QuoteFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteFetchError::Request(msg) => write!(f, "request failed: {}", msg),
            QuoteFetchError::Upstream(msg) => write!(f, "upstream error: {}", msg),
            QuoteFetchError::Payload(msg) => write!(f, "unusable payload: {}", msg),
        }
    }
}

/// Fetches one inspirational quote per call from a JSON quote API.
///
/// The upstream returns an array of `{q, a}` objects; the first element is
/// formatted for display. Every failure mode degrades to
/// [`QuoteOutcome::Fallback`]; no error leaves this type. No retry, no
/// caching: each page view re-fetches.
pub struct QuoteFetcher {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl QuoteFetcher {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            timeout,
        }
    }

    /// One outbound GET, bounded by the configured timeout so a request
    /// task can never suspend indefinitely on the quote boundary.
    pub async fn fetch(&self) -> QuoteOutcome {
        match self.try_fetch().await {
            Ok(quote) => QuoteOutcome::Fetched(quote),
            Err(error) => {
                debug!("Quote fetch fell back to default: {}", error);
                QuoteOutcome::Fallback
            }
        }
    }

    async fn try_fetch(&self) -> Result<String, QuoteFetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| QuoteFetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteFetchError::Upstream(format!(
                "quote API returned {}",
                status
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| QuoteFetchError::Payload(e.to_string()))?;

        format_quote(&payload).ok_or_else(|| {
            QuoteFetchError::Payload("expected a non-empty array of {q, a} objects".to_string())
        })
    }
}

/// Extract and format the first quote of a quote-API payload.
fn format_quote(payload: &serde_json::Value) -> Option<String> {
    let first = payload.get(0)?;
    let text = first.get("q")?.as_str()?;
    let author = first.get("a")?.as_str()?;
    Some(format!("“{}” — {}", text, author))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, HttpServer, web};
    use std::net::TcpListener;

    #[test]
    fn format_quote_valid_payload() {
        let payload = serde_json::json!([{"q": "Q", "a": "A"}]);
        assert_eq!(format_quote(&payload).as_deref(), Some("“Q” — A"));
    }

    #[test]
    fn format_quote_uses_first_element() {
        let payload = serde_json::json!([
            {"q": "first", "a": "one"},
            {"q": "second", "a": "two"}
        ]);
        assert_eq!(format_quote(&payload).as_deref(), Some("“first” — one"));
    }

    #[test]
    fn format_quote_empty_array() {
        let payload = serde_json::json!([]);
        assert!(format_quote(&payload).is_none());
    }

    #[test]
    fn format_quote_missing_author() {
        let payload = serde_json::json!([{"q": "Q"}]);
        assert!(format_quote(&payload).is_none());
    }

    #[test]
    fn format_quote_non_array() {
        let payload = serde_json::json!({"q": "Q", "a": "A"});
        assert!(format_quote(&payload).is_none());
    }

    #[test]
    fn fallback_outcome_renders_fixed_string() {
        assert_eq!(QuoteOutcome::Fallback.into_display_string(), FALLBACK_QUOTE);
        assert!(QuoteOutcome::Fallback.is_fallback());
    }

    async fn ok_payload() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!([
            {"q": "Talk is cheap. Show me the code.", "a": "Linus Torvalds"}
        ]))
    }

    async fn empty_payload() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!([]))
    }

    async fn not_json() -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/plain")
            .body("no quotes here")
    }

    async fn upstream_error() -> HttpResponse {
        HttpResponse::InternalServerError().finish()
    }

    async fn slow_payload() -> HttpResponse {
        actix_web::rt::time::sleep(Duration::from_secs(5)).await;
        ok_payload().await
    }

    fn spawn_upstream() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream addr");
        let server = HttpServer::new(|| {
            App::new()
                .route("/ok", web::get().to(ok_payload))
                .route("/empty", web::get().to(empty_payload))
                .route("/invalid", web::get().to(not_json))
                .route("/error", web::get().to(upstream_error))
                .route("/slow", web::get().to(slow_payload))
        })
        .listen(listener)
        .expect("listen mock upstream")
        .workers(1)
        .run();
        actix_web::rt::spawn(server);
        format!("http://{}", addr)
    }

    #[actix_web::test]
    async fn fetch_formats_upstream_quote() {
        let base = spawn_upstream();
        let fetcher = QuoteFetcher::new(&format!("{}/ok", base), Duration::from_secs(2));
        match fetcher.fetch().await {
            QuoteOutcome::Fetched(quote) => {
                assert_eq!(quote, "“Talk is cheap. Show me the code.” — Linus Torvalds");
            }
            QuoteOutcome::Fallback => panic!("expected a fetched quote"),
        }
    }

    #[actix_web::test]
    async fn fetch_empty_payload_falls_back() {
        let base = spawn_upstream();
        let fetcher = QuoteFetcher::new(&format!("{}/empty", base), Duration::from_secs(2));
        assert!(fetcher.fetch().await.is_fallback());
    }

    #[actix_web::test]
    async fn fetch_non_json_falls_back() {
        let base = spawn_upstream();
        let fetcher = QuoteFetcher::new(&format!("{}/invalid", base), Duration::from_secs(2));
        assert!(fetcher.fetch().await.is_fallback());
    }

    #[actix_web::test]
    async fn fetch_upstream_error_falls_back() {
        let base = spawn_upstream();
        let fetcher = QuoteFetcher::new(&format!("{}/error", base), Duration::from_secs(2));
        assert!(fetcher.fetch().await.is_fallback());
    }

    #[actix_web::test]
    async fn fetch_timeout_falls_back() {
        let base = spawn_upstream();
        let fetcher = QuoteFetcher::new(&format!("{}/slow", base), Duration::from_millis(200));
        assert!(fetcher.fetch().await.is_fallback());
    }

    #[actix_web::test]
    async fn fetch_connection_refused_falls_back() {
        // Port 1 is never listening; the connect fails immediately.
        let fetcher = QuoteFetcher::new("http://127.0.0.1:1/api/random", Duration::from_secs(2));
        assert!(fetcher.fetch().await.is_fallback());
    }
}
