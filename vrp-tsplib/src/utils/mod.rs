//! Contains helper types shared by readers and writers.

use std::sync::Arc;

mod error;
pub use self::error::*;

mod timing;
pub use self::timing::Timer;

/// A logger type used to report informational messages, such as timings.
pub type InfoLogger = Arc<dyn Fn(&str)>;
