// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, Result, web};
use log::error;
use minijinja::Value;

use super::error;
use crate::app_state::AppState;
use crate::config::AppConfig;
use crate::content::{Topic, topic_sections, topic_sources};
use crate::templates::{LandingPageContext, TopicPageContext, render_minijinja_template};

/// Landing page: a fresh quote and the topic navigation, nothing else.
pub async fn index(
    config: web::Data<AppConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let quote = app_state.quotes.fetch().await.into_display_string();
    let context =
        LandingPageContext::new(&config.app.name, &config.app.description, quote).to_value();
    respond_html(&app_state, "index.html", context)
}

pub async fn software_engineering(
    config: web::Data<AppConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    render_topic(Topic::SoftwareEngineering, &config, &app_state).await
}

pub async fn algorithms(
    config: web::Data<AppConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    render_topic(Topic::Algorithms, &config, &app_state).await
}

pub async fn software_design(
    config: web::Data<AppConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    render_topic(Topic::SoftwareDesign, &config, &app_state).await
}

pub async fn project_management(
    config: web::Data<AppConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    render_topic(Topic::ProjectManagement, &config, &app_state).await
}

pub async fn not_found(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    error::serve_404(&app_state.error_renderer, app_state.templates.as_ref())
}

/// Topic pages differ only in the freshly fetched quote; sections and
/// sources come straight from the static content tables.
async fn render_topic(
    topic: Topic,
    config: &AppConfig,
    app_state: &AppState,
) -> Result<HttpResponse> {
    let quote = app_state.quotes.fetch().await.into_display_string();
    let sections = topic_sections(topic, &app_state.icons);
    let sources = topic_sources(topic);
    let context = TopicPageContext::new(
        &config.app.name,
        topic.title(),
        quote,
        sections,
        sources,
    )
    .to_value();
    respond_html(app_state, "topic.html", context)
}

fn respond_html(app_state: &AppState, template_name: &str, context: Value) -> Result<HttpResponse> {
    match render_minijinja_template(app_state.templates.as_ref(), template_name, context) {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(e) => {
            error!("Failed to render template {}: {}", template_name, e);
            error::serve_500(&app_state.error_renderer, app_state.templates.as_ref())
        }
    }
}
