pub mod state;
pub mod view;

pub use state::{Dashboard, LoadState};
pub use view::{DashboardView, Summary, TablePage, TableRow};
