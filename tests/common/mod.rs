// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, HttpServer, web};
use std::net::TcpListener;
use std::sync::Arc;

use primer::app_state::AppState;
use primer::config::AppConfig;
use primer::icons::IconLibrary;
use primer::public;

// A quote endpoint on port 1 is refused immediately, so pages render the
// deterministic fallback quote.
pub const UNREACHABLE_QUOTE_ENDPOINT: &str = "http://127.0.0.1:1/api/random";

pub struct TestHarness {
    pub config: Arc<AppConfig>,
    pub app_state: Arc<AppState>,
}

#[derive(Clone)]
pub struct AppBundle {
    pub config: Arc<AppConfig>,
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_quote_endpoint(UNREACHABLE_QUOTE_ENDPOINT)
    }

    pub fn with_quote_endpoint(endpoint: &str) -> Self {
        let mut config = AppConfig::default();
        config.app.name = "Primer Test".to_string();
        config.quote.endpoint = endpoint.to_string();
        config.quote.timeout_ms = 500;
        config.validate().expect("test config");

        let config = Arc::new(config);
        let icons = IconLibrary::load().expect("icon library");
        let app_state = Arc::new(AppState::new(&config, icons));

        Self { config, app_state }
    }

    pub fn app_bundle(&self) -> AppBundle {
        AppBundle {
            config: self.config.clone(),
            app_state: self.app_state.clone(),
        }
    }
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(bundle.config))
        .app_data(web::Data::from(bundle.app_state))
        .configure(public::configure)
        .default_service(web::route().to(public::handlers::not_found))
}

async fn quote_payload() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!([
        {"q": "Simplicity is prerequisite for reliability.", "a": "Edsger W. Dijkstra"}
    ]))
}

/// Spawn a local stand-in for the quote API; returns its endpoint URL.
pub fn spawn_quote_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream addr");
    let server = HttpServer::new(|| {
        App::new().route("/api/random", web::get().to(quote_payload))
    })
    .listen(listener)
    .expect("listen mock upstream")
    .workers(1)
    .run();
    actix_web::rt::spawn(server);
    format!("http://{}/api/random", addr)
}

pub const MOCK_QUOTE_RENDERED: &str =
    "“Simplicity is prerequisite for reliability.” — Edsger W. Dijkstra";
