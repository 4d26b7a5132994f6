//! Dashboard state: one owned record set plus the active controls.
//!
//! The fetched set is explicit state with a lifecycle, not an ambient global:
//! every view is derived from `LoadState` plus the controls, recomputed from
//! scratch on each call.

use tracing::{info, warn};

use salesdash_core::config::PAGE_SIZES;
use salesdash_core::{DateWindow, FetchError, RecordSource, SalesRecord, SortDirection, SortField};

use crate::view::DashboardView;

/// Lifecycle of the fetched record set.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready(Vec<SalesRecord>),
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// The dashboard: record set lifecycle, date window, search text, table sort
/// and pagination. Mutators adjust one control each; `view` derives all
/// output.
#[derive(Debug, Clone)]
pub struct Dashboard {
    load: LoadState,
    window: DateWindow,
    search: String,
    sort: Option<(SortField, SortDirection)>,
    page: usize,
    page_size: usize,
}

impl Dashboard {
    pub fn new(window: DateWindow) -> Self {
        Self {
            load: LoadState::Idle,
            window,
            search: String::new(),
            sort: None,
            page: 0,
            page_size: PAGE_SIZES[0],
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Fetch once through `source` and store the outcome. Failure is recorded,
    /// never propagated: the dashboard keeps rendering with an empty set.
    pub async fn refresh(&mut self, source: &dyn RecordSource) {
        self.load = LoadState::Loading;
        match source.fetch_all().await {
            Ok(records) => {
                info!(count = records.len(), "sales records loaded");
                self.load = LoadState::Ready(records);
            }
            Err(e) => {
                warn!(error = %e, "sales fetch failed, rendering empty");
                self.load = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn finish_load(&mut self, result: Result<Vec<SalesRecord>, FetchError>) {
        match result {
            Ok(records) => self.load = LoadState::Ready(records),
            Err(e) => self.load = LoadState::Failed(e.to_string()),
        }
    }

    pub fn set_window(&mut self, window: DateWindow) {
        self.window = window;
        self.page = 0;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 0;
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.sort = Some((field, direction));
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Accepts only the offered sizes ({10, 25, 50, 100}); anything else is
    /// refused and leaves the state untouched.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            warn!(size, "rejected page size outside the offered set");
            return false;
        }
        self.page_size = size;
        self.page = 0;
        true
    }

    /// Derive the full view: filter by date, filter by text, sort, aggregate,
    /// paginate. Pure with respect to the owned state; an unloaded or failed
    /// dashboard renders an empty view rather than erroring.
    pub fn view(&self) -> DashboardView {
        let records: &[SalesRecord] = match &self.load {
            LoadState::Ready(records) => records,
            _ => &[],
        };
        crate::view::build_view(
            records,
            &self.window,
            &self.search,
            self.sort,
            self.page,
            self.page_size,
            self.load.is_loading(),
            match &self.load {
                LoadState::Failed(msg) => Some(msg.clone()),
                _ => None,
            },
        )
    }
}
