// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Value, context};
use serde::Serialize;

use crate::content::{Section, Source, Topic};

const STYLE_CSS: &str = "/static/style.css";

/// Navigation entry for the fixed topic list shown on every page.
#[derive(Debug, Clone, Serialize)]
pub struct TopicLink {
    pub title: String,
    pub path: String,
}

fn topic_links() -> Vec<TopicLink> {
    Topic::ALL
        .iter()
        .map(|topic| TopicLink {
            title: topic.title().to_string(),
            path: topic.route(),
        })
        .collect()
}

/// Context for the landing page: a quote and the topic navigation, no
/// sections or sources.
#[derive(Debug, Clone)]
pub struct LandingPageContext {
    app_name: String,
    description: String,
    quote: String,
}

impl LandingPageContext {
    pub fn new(app_name: &str, description: &str, quote: String) -> Self {
        Self {
            app_name: app_name.to_string(),
            description: description.to_string(),
            quote,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            style_css => STYLE_CSS,
            app_name => &self.app_name,
            description => &self.description,
            quote => &self.quote,
            topics => topic_links()
        }
    }
}

/// Context for a topic page. Discarded once the response body is built.
#[derive(Debug, Clone)]
pub struct TopicPageContext {
    app_name: String,
    title: String,
    quote: String,
    sections: Vec<Section>,
    sources: Vec<Source>,
}

impl TopicPageContext {
    pub fn new(
        app_name: &str,
        title: &str,
        quote: String,
        sections: Vec<Section>,
        sources: Vec<Source>,
    ) -> Self {
        Self {
            app_name: app_name.to_string(),
            title: title.to_string(),
            quote,
            sections,
            sources,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            style_css => STYLE_CSS,
            app_name => &self.app_name,
            title => &self.title,
            quote => &self.quote,
            sections => &self.sections,
            sources => &self.sources,
            topics => topic_links()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
}

impl ErrorPageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            style_css => STYLE_CSS,
            app_name => &self.app_name
        }
    }
}
