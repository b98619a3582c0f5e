pub mod dashboard;
pub mod installer;
pub mod rain;
pub mod timer;

pub use dashboard::{DashboardController, DashboardError, DashboardState, SearchResult, DEFAULT_REFRESH_INTERVAL};
pub use installer::{InstallerController, InstallerState, InstallerTimings, NotepadWindow, Point};
pub use rain::{RainConfig, RainDrop, RainField};
pub use timer::{FirstTick, TimerHandle};
