// This file is part of the product Primer.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

pub mod error;
pub mod handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route(
            "/software_engineering",
            web::get().to(handlers::software_engineering),
        )
        .route("/algorithms", web::get().to(handlers::algorithms))
        .route("/software_design", web::get().to(handlers::software_design))
        .route(
            "/project_management",
            web::get().to(handlers::project_management),
        );
}
