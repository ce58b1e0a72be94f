// Thu Jan 22 2026 - Alex

pub mod logging;

pub use logging::{init_logger, ScopedTimer};
