// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::icons::IconLibrary;
use crate::public::error::ErrorRenderer;
use crate::quote::QuoteFetcher;
use crate::templates::{MiniJinjaEngine, TemplateEngine};

/// Read-only application state shared across workers.
///
/// The icon library is loaded before the server binds (a failed load
/// aborts startup); nothing here mutates after construction.
pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    pub error_renderer: ErrorRenderer,
    pub icons: IconLibrary,
    pub quotes: QuoteFetcher,
}

impl AppState {
    pub fn new(config: &AppConfig, icons: IconLibrary) -> Self {
        Self {
            templates: Arc::new(MiniJinjaEngine::new()),
            error_renderer: ErrorRenderer::new(config.app.name.clone()),
            icons,
            quotes: QuoteFetcher::new(&config.quote.endpoint, config.quote_timeout()),
        }
    }
}

#[cfg(test)]
impl AppState {
    pub fn new_for_tests(config: &AppConfig) -> Self {
        let icons = IconLibrary::load().expect("test icon library");
        Self::new(config, icons)
    }
}
