// File: crates/skycast-core/src/lib.rs
// Summary: Core library entry point; exports the weather model, view model, and chart geometry.

pub mod dashboard;
pub mod error;
pub mod icon;
pub mod model;
pub mod path;
pub mod sample;
pub mod surface;
pub mod timefmt;
pub mod types;
pub mod view;

pub use dashboard::{render_dashboard, Dashboard};
pub use error::RenderError;
pub use model::WeatherReport;
pub use path::{ChartPathBuilder, MarkerPoint, PathDescriptor};
pub use sample::{Sample, Series};
pub use surface::DashboardSurface;
pub use types::Extent;
pub use view::DashboardView;
