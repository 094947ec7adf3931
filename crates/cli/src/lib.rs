mod app;
mod generate;
mod logger;

/// Re-exports.
pub use app::Args;
pub use generate::{write_toc, TocStats};
pub use logger::LOG_PATH_ENV;
