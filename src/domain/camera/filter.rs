// SPDX-License-Identifier: MPL-2.0
//! Camera list filtering.
//!
//! This module contains the pure filter predicates applied to the master
//! camera list. All predicates are conjunctive (AND): a camera is visible
//! only when every active predicate matches.
//!
//! # Available predicates
//!
//! - free-text search: case-insensitive substring match against name OR
//!   location, active when non-empty
//! - status: exact match, active when a status is selected
//! - location: exact match, active when a location is selected

use super::types::{Camera, CameraStatus};

/// Combined camera filter with AND logic.
///
/// When no predicate is active, every camera matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CameraFilter {
    /// Free-text search term. Empty means inactive.
    pub search: String,
    /// Required status. `None` means any status.
    pub status: Option<CameraStatus>,
    /// Required location. `None` means any location.
    pub location: Option<String>,
}

impl CameraFilter {
    /// Creates a filter with no active predicates (matches all cameras).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the given camera matches every active predicate.
    #[must_use]
    pub fn matches(&self, camera: &Camera) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_name = camera.name.to_lowercase().contains(&needle);
            let in_location = camera.location.to_lowercase().contains(&needle);
            if !in_name && !in_location {
                return false;
            }
        }

        if let Some(status) = self.status {
            if camera.status != status {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if &camera.location != location {
                return false;
            }
        }

        true
    }

    /// Derives the filtered subset from the full master list.
    ///
    /// Always recomputes from the complete list, never from a previously
    /// filtered subset, so relaxing a predicate brings records back.
    #[must_use]
    pub fn apply(&self, cameras: &[Camera]) -> Vec<Camera> {
        cameras
            .iter()
            .filter(|camera| self.matches(camera))
            .cloned()
            .collect()
    }

    /// Returns `true` if any predicate is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status.is_some() || self.location.is_some()
    }

    /// Returns the number of active predicates.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.search.is_empty() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        if self.location.is_some() {
            count += 1;
        }
        count
    }

    /// Resets all predicates to their inactive state.
    pub fn clear(&mut self) {
        self.search.clear();
        self.status = None;
        self.location = None;
    }
}

/// Returns the distinct, sorted, non-empty locations present in the list.
///
/// Feeds the location selector, which always offers exactly the locations of
/// the current master list.
#[must_use]
pub fn distinct_locations(cameras: &[Camera]) -> Vec<String> {
    let mut locations: Vec<String> = cameras
        .iter()
        .map(|camera| camera.location.clone())
        .filter(|location| !location.is_empty())
        .collect();
    locations.sort();
    locations.dedup();
    locations
}
