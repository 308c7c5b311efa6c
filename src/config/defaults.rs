// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Single source of truth for defaults used across the application.

// ==========================================================================
// Pagination Defaults
// ==========================================================================

/// Number of cameras shown per table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default base URL of the fleet API.
pub const DEFAULT_API_BASE_URL: &str = "https://api-app-staging.wobot.ai";

/// Default per-request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum accepted request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum accepted request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event ring buffer.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 500;
