// SPDX-License-Identifier: MPL-2.0
//! `camboard` is a camera fleet dashboard built with the Iced GUI framework.
//!
//! It fetches the fleet from a remote API, renders it in a searchable,
//! filterable, paginated table, and toggles a camera's active status through
//! the API. Internationalization is handled with Fluent, preferences with a
//! TOML settings file, and failures land in an in-app diagnostics log.

pub mod api;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
