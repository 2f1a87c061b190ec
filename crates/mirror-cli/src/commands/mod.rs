//! Command implementations

mod status;
mod sync;

pub use status::run_status;
pub use sync::run_sync;
