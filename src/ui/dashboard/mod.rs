// SPDX-License-Identifier: MPL-2.0
//! Dashboard component: the searchable, filterable, paginated camera table.
//!
//! The component owns the master list, the derived filtered list, the filter
//! predicates, and the pager. Messages that require a server round-trip are
//! not performed here; [`State::update`] returns an [`Action`] and the app
//! layer turns it into an async task. This keeps the whole
//! load → filter → paginate pipeline synchronous and testable.
//!
//! Two pieces of bookkeeping tame the races the API would otherwise allow:
//! - every fetch carries a generation number; only the latest generation's
//!   response is applied, so overlapping reloads cannot roll the list back;
//! - a camera with an in-flight status update is marked pending and further
//!   toggles for it are ignored until the update resolves (writes are
//!   serialized per camera id).

pub mod view;

use crate::domain::camera::{filter, Camera, CameraFilter, CameraId, CameraStatus, Pager};
use std::collections::HashSet;

/// Messages handled by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    /// The search input changed.
    SearchChanged(String),
    /// A status was selected in the status filter (`None` = all statuses).
    StatusFilterSelected(Option<CameraStatus>),
    /// A location was selected in the location filter (`None` = all).
    LocationFilterSelected(Option<String>),
    /// All filter predicates were reset.
    FiltersCleared,
    /// A zero-based page index was selected.
    PageSelected(usize),
    NextPage,
    PreviousPage,
    /// The status toggle of one camera row was pressed.
    StatusToggled(CameraId),
    /// A manual refresh was requested.
    Refresh,
}

/// Side effect the app layer must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Issue the read request; the response must echo `generation`.
    FetchCameras { generation: u64 },
    /// Issue the write request for one camera.
    UpdateStatus { id: CameraId, status: CameraStatus },
}

/// Dashboard state.
#[derive(Debug, Default)]
pub struct State {
    /// Master list: the full fleet as last received from the server.
    cameras: Vec<Camera>,
    /// Filtered list: subset of the master list matching all predicates.
    filtered: Vec<Camera>,
    filter: CameraFilter,
    pager: Pager,
    is_loading: bool,
    /// Generation of the most recently issued fetch.
    fetch_generation: u64,
    /// Cameras with an in-flight status update.
    pending_updates: HashSet<CameraId>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a message and returns the side effect to perform, if any.
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::SearchChanged(search) => {
                self.filter.search = search;
                self.refilter();
                Action::None
            }
            Message::StatusFilterSelected(status) => {
                self.filter.status = status;
                self.refilter();
                Action::None
            }
            Message::LocationFilterSelected(location) => {
                self.filter.location = location;
                self.refilter();
                Action::None
            }
            Message::FiltersCleared => {
                self.filter.clear();
                self.refilter();
                Action::None
            }
            Message::PageSelected(page) => {
                self.pager.select(page, self.filtered.len());
                Action::None
            }
            Message::NextPage => {
                self.pager.next(self.filtered.len());
                Action::None
            }
            Message::PreviousPage => {
                self.pager.previous();
                Action::None
            }
            Message::StatusToggled(id) => self.toggle_status(id),
            Message::Refresh => Action::FetchCameras {
                generation: self.begin_fetch(),
            },
        }
    }

    /// Starts a new fetch and returns its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.is_loading = true;
        self.fetch_generation
    }

    /// Applies a successful fetch response.
    ///
    /// Returns `false` when the response belongs to a superseded fetch, in
    /// which case the state is left untouched.
    pub fn apply_fetch(&mut self, generation: u64, cameras: Vec<Camera>) -> bool {
        if generation != self.fetch_generation {
            return false;
        }
        self.is_loading = false;
        self.cameras = cameras;
        // The master list changed without a filter edit: recompute the
        // subset and keep the page position, clamped to the new length.
        self.filtered = self.filter.apply(&self.cameras);
        self.pager.clamp(self.filtered.len());
        true
    }

    /// Records a failed fetch. Master and filtered lists stay at their
    /// prior values.
    pub fn fetch_failed(&mut self, generation: u64) {
        if generation == self.fetch_generation {
            self.is_loading = false;
        }
    }

    /// Clears the pending marker after a status update resolved
    /// (successfully or not).
    pub fn finish_update(&mut self, id: CameraId) {
        self.pending_updates.remove(&id);
    }

    /// Recomputes the filtered list from the master list and resets to the
    /// first page. Runs synchronously on every filter-input change.
    fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.cameras);
        self.pager.reset();
    }

    fn toggle_status(&mut self, id: CameraId) -> Action {
        if self.pending_updates.contains(&id) {
            return Action::None;
        }
        let Some(camera) = self.cameras.iter().find(|camera| camera.id == id) else {
            return Action::None;
        };
        self.pending_updates.insert(id);
        Action::UpdateStatus {
            id,
            status: camera.status.toggled(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors used by the view
    // ------------------------------------------------------------------

    /// The slice of the filtered list visible on the current page.
    #[must_use]
    pub fn visible_page(&self) -> &[Camera] {
        self.pager.slice(&self.filtered)
    }

    #[must_use]
    pub fn filter(&self) -> &CameraFilter {
        &self.filter
    }

    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.filtered.len())
    }

    #[must_use]
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn is_updating(&self, id: CameraId) -> bool {
        self.pending_updates.contains(&id)
    }

    /// Distinct locations of the master list, for the location selector.
    #[must_use]
    pub fn locations(&self) -> Vec<String> {
        filter::distinct_locations(&self.cameras)
    }
}
