//! The process-wide default [`Calendar`].
//!
//! Created lazily on first use via a `std::sync::OnceLock`, over the
//! built-in dataset. Its overlay is shared by every caller in the process;
//! code that needs an isolated overlay should build its own `Calendar`.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::calendar::Calendar;

static INSTANCE: OnceLock<Arc<Calendar>> = OnceLock::new();

/// Return a handle to the process-wide default calendar.
///
/// Every call returns the same instance.
pub fn default_calendar() -> Arc<Calendar> {
    INSTANCE
        .get_or_init(|| {
            debug!("initializing default calendar");
            Arc::new(Calendar::new())
        })
        .clone()
}
