//! Tool configuration: profiles, parsing options and logging.

pub mod loader;
pub mod types;
