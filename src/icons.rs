// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::collections::HashMap;

use serde::Deserialize;

use crate::content::Topic;

/// Icon dataset bundled into the binary. Parsed once at startup; the
/// server must not accept connections before the parse has completed.
const EMBEDDED_DATASET: &str = include_str!("icons/dataset.json");

#[derive(Debug)]
pub enum IconError {
    ParseError(String),
}

impl std::fmt::Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconError::ParseError(msg) => write!(f, "Icon dataset parse error: {}", msg),
        }
    }
}

impl std::error::Error for IconError {}

#[derive(Debug, Deserialize)]
struct IconEntry {
    slug: String,
    #[allow(dead_code)]
    title: String,
    svg: String,
}

#[derive(Debug, Deserialize)]
struct IconDataset {
    icons: Vec<IconEntry>,
}

/// Read-only collection of inline SVG markup, keyed by icon slug.
///
/// Loaded once during startup and shared by reference through `AppState`.
pub struct IconLibrary {
    icons: HashMap<String, String>,
}

impl IconLibrary {
    /// Parse the embedded dataset. A failure here aborts startup: an
    /// empty library would make every lookup silently miss for the
    /// lifetime of the process.
    pub fn load() -> Result<Self, IconError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    fn from_json(raw: &str) -> Result<Self, IconError> {
        let dataset: IconDataset =
            serde_json::from_str(raw).map_err(|e| IconError::ParseError(e.to_string()))?;
        let icons = dataset
            .icons
            .into_iter()
            .map(|entry| (entry.slug, entry.svg))
            .collect();
        Ok(Self { icons })
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&str> {
        self.icons.get(slug).map(String::as_str)
    }

    /// Inline SVG markup for the topic's mapped icon, or an empty string
    /// when the slug is absent from the dataset. Lookup misses are not
    /// errors; the page simply renders without an icon.
    pub fn topic_icon(&self, topic: Topic) -> &str {
        self.get(topic_slug(topic)).unwrap_or("")
    }
}

/// Fixed topic-to-slug mapping, one slug per topic.
fn topic_slug(topic: Topic) -> &'static str {
    match topic {
        Topic::SoftwareEngineering => "github",
        Topic::Algorithms => "python",
        Topic::SoftwareDesign => "sketch",
        Topic::ProjectManagement => "jira",
    }
}
