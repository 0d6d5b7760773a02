// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_files::Files;
use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use primer::app_state::AppState;
use primer::config::AppConfig;
use primer::icons::IconLibrary;
use primer::public;

const CONFIG_FILE: &str = "config.yaml";
const STATIC_DIR: &str = "public";

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let config = match AppConfig::load(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("❌ Configuration error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    init_logging(&config);

    // The icon dataset must be usable before the first request is
    // accepted; a partial library would silently drop every icon for the
    // lifetime of the process.
    let icons = match IconLibrary::load() {
        Ok(icons) => icons,
        Err(error) => {
            eprintln!("❌ Failed to load icon dataset: {}", error);
            eprintln!("❌ Application cannot start without the icon dataset.");
            return 1;
        }
    };
    info!("✅ Icon dataset loaded ({} icons)", icons.len());

    match System::new().block_on(run_server(config, icons)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

fn init_logging(config: &AppConfig) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level_from(&config.logging.level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn log_level_from(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

async fn run_server(config: AppConfig, icons: IconLibrary) -> std::io::Result<()> {
    let config = Arc::new(config);
    let app_state = Arc::new(AppState::new(&config, icons));

    let host = config.server.host.clone();
    let port = config.server.port;

    info!("Starting {} - {}", config.app.name, config.app.description);
    info!("Quote endpoint: {}", config.quote.endpoint);

    let factory = {
        let config = config.clone();
        let app_state = app_state.clone();

        move || {
            App::new()
                .app_data(web::Data::from(config.clone()))
                .app_data(web::Data::from(app_state.clone()))
                .wrap(Logger::new(
                    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
                ))
                .configure(public::configure)
                .service(Files::new("/static", STATIC_DIR))
                .default_service(web::route().to(public::handlers::not_found))
        }
    };

    let server = HttpServer::new(factory).bind((host.as_str(), port))?.run();
    info!("✅ Server started on port {}", port);
    server.await
}
