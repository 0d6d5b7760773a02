// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::Serialize;

use crate::icons::IconLibrary;

/// The fixed set of study topics served by the application.
///
/// Each topic maps 1:1 to a route, a content table and an icon slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    SoftwareEngineering,
    Algorithms,
    SoftwareDesign,
    ProjectManagement,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::SoftwareEngineering,
        Topic::Algorithms,
        Topic::SoftwareDesign,
        Topic::ProjectManagement,
    ];

    /// Stable key, also the path segment of the topic's route.
    pub fn key(self) -> &'static str {
        match self {
            Topic::SoftwareEngineering => "software_engineering",
            Topic::Algorithms => "algorithms",
            Topic::SoftwareDesign => "software_design",
            Topic::ProjectManagement => "project_management",
        }
    }

    pub fn route(self) -> String {
        format!("/{}", self.key())
    }

    pub fn title(self) -> &'static str {
        match self {
            Topic::SoftwareEngineering => "Software Engineering",
            Topic::Algorithms => "Algorithms",
            Topic::SoftwareDesign => "Software Design",
            Topic::ProjectManagement => "Project Management",
        }
    }
}

/// A titled block of static markup displayed on a topic page.
///
/// `body` and `icon` hold raw markup; the template marks them as safe.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
}

/// A citation link displayed alongside a topic page.
#[derive(Debug, Clone, Serialize)]
pub struct Source {
    pub text: String,
    pub url: String,
}

struct SectionDef {
    title: &'static str,
    body: &'static str,
}

struct SourceDef {
    text: &'static str,
    url: &'static str,
}

// Page content is part of the external contract: titles, bodies and
// sources must stay byte-for-byte stable, in display order.

const SOFTWARE_ENGINEERING_SECTIONS: [SectionDef; 3] = [
    SectionDef {
        title: "1. Software Development Life Cycle (SDLC)",
        body: "<p>The SDLC consists of several phases to deliver quality software.</p>",
    },
    SectionDef {
        title: "2. Methodologies",
        body: "<p>Common methodologies include Waterfall and Agile.</p>",
    },
    SectionDef {
        title: "3. Quality Assurance & DevOps",
        body: "<p>Automation, CI/CD, and IaC improve software delivery.</p>",
    },
];

const SOFTWARE_ENGINEERING_SOURCES: [SourceDef; 3] = [
    SourceDef {
        text: "Systems Development Life Cycle – Wikipedia",
        url: "https://en.wikipedia.org/wiki/Systems_development_life_cycle",
    },
    SourceDef {
        text: "Agile 101 – Agile Alliance",
        url: "https://www.agilealliance.org/agile101/",
    },
    SourceDef {
        text: "What is DevOps? – Red Hat",
        url: "https://www.redhat.com/en/topics/devops/what-is-devops",
    },
];

const ALGORITHMS_SECTIONS: [SectionDef; 3] = [
    SectionDef {
        title: "1. Classic Algorithms",
        body: "<p>Sorting, searching, and graph algorithms are foundational.</p>",
    },
    SectionDef {
        title: "2. Hash Algorithms",
        body: "<p>Hashes provide fixed-length representations for integrity checks.</p>",
    },
    SectionDef {
        title: "3. Performance Considerations",
        body: "<p>Analyze time and space complexity to optimize algorithms.</p>",
    },
];

const ALGORITHMS_SOURCES: [SourceDef; 3] = [
    SourceDef {
        text: "Sorting algorithm – Wikipedia",
        url: "https://en.wikipedia.org/wiki/Sorting_algorithm",
    },
    SourceDef {
        text: "Binary search algorithm – Wikipedia",
        url: "https://en.wikipedia.org/wiki/Binary_search_algorithm",
    },
    SourceDef {
        text: "Cryptographic hash function – Wikipedia",
        url: "https://en.wikipedia.org/wiki/Cryptographic_hash_function",
    },
];

const SOFTWARE_DESIGN_SECTIONS: [SectionDef; 3] = [
    SectionDef {
        title: "1. SOLID Principles",
        body: "<p>Design principles to make software more maintainable and scalable.</p>",
    },
    SectionDef {
        title: "2. Common Design Patterns",
        body: "<p>Reusable patterns to solve recurring problems in software design.</p>",
    },
    SectionDef {
        title: "3. UML Diagrams",
        body: "<p>Visual representations of system structure and behavior.</p>",
    },
];

const SOFTWARE_DESIGN_SOURCES: [SourceDef; 3] = [
    SourceDef {
        text: "SOLID (object-oriented design) – Wikipedia",
        url: "https://en.wikipedia.org/wiki/SOLID_(object-oriented_design)",
    },
    SourceDef {
        text: "Design Patterns – Refactoring.Guru",
        url: "https://refactoring.guru/design-patterns",
    },
    SourceDef {
        text: "UML – UML.org",
        url: "https://www.uml.org/",
    },
];

const PROJECT_MANAGEMENT_SECTIONS: [SectionDef; 3] = [
    SectionDef {
        title: "1. Agile Framework",
        body: "<p>Iterative delivery with stakeholder feedback and continuous improvement.</p>",
    },
    SectionDef {
        title: "2. Key Ceremonies",
        body: "<p>Planning, daily standups, reviews, and retrospectives.</p>",
    },
    SectionDef {
        title: "3. Roles & Artifacts",
        body: "<p>Product Owner, Scrum Master, and the team maintain the backlog and track progress.</p>",
    },
];

const PROJECT_MANAGEMENT_SOURCES: [SourceDef; 3] = [
    SourceDef {
        text: "Agile software development – Wikipedia",
        url: "https://en.wikipedia.org/wiki/Agile_software_development",
    },
    SourceDef {
        text: "The Scrum Guide – Scrum.org",
        url: "https://www.scrum.org/resources/scrum-guide",
    },
    SourceDef {
        text: "Scrum Artifacts – Mountain Goat Software",
        url: "https://www.mountaingoatsoftware.com/agile/scrum/artifacts",
    },
];

fn section_defs(topic: Topic) -> &'static [SectionDef; 3] {
    match topic {
        Topic::SoftwareEngineering => &SOFTWARE_ENGINEERING_SECTIONS,
        Topic::Algorithms => &ALGORITHMS_SECTIONS,
        Topic::SoftwareDesign => &SOFTWARE_DESIGN_SECTIONS,
        Topic::ProjectManagement => &PROJECT_MANAGEMENT_SECTIONS,
    }
}

fn source_defs(topic: Topic) -> &'static [SourceDef; 3] {
    match topic {
        Topic::SoftwareEngineering => &SOFTWARE_ENGINEERING_SOURCES,
        Topic::Algorithms => &ALGORITHMS_SOURCES,
        Topic::SoftwareDesign => &SOFTWARE_DESIGN_SOURCES,
        Topic::ProjectManagement => &PROJECT_MANAGEMENT_SOURCES,
    }
}

/// Assemble the topic's section list in display order.
///
/// The first section carries the topic's icon; the tables themselves stay
/// pure data. An unresolved icon yields `None` and the page renders
/// without one.
pub fn topic_sections(topic: Topic, icons: &IconLibrary) -> Vec<Section> {
    section_defs(topic)
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let icon = if index == 0 {
                let markup = icons.topic_icon(topic);
                if markup.is_empty() {
                    None
                } else {
                    Some(markup.to_string())
                }
            } else {
                None
            };
            Section {
                title: def.title.to_string(),
                body: def.body.to_string(),
                icon,
            }
        })
        .collect()
}

/// Assemble the topic's citation list in display order.
pub fn topic_sources(topic: Topic) -> Vec<Source> {
    source_defs(topic)
        .iter()
        .map(|def| Source {
            text: def.text.to_string(),
            url: def.url.to_string(),
        })
        .collect()
}
