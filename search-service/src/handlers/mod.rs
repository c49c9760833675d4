pub mod app;
pub mod search;

pub use app::{health_check, index, metrics_endpoint};
pub use search::search;
