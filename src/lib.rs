//! Pythonic - Python built-ins over statically typed Rust containers
//!
//! This crate provides the built-in functions (`len`, `max`, `map`,
//! `xrange`, `sorted`, ...) that compiled Python code calls, dispatched at
//! compile time on the argument types and their iterator categories.

pub mod builtins;
pub mod config;
pub mod error;
pub mod functor;
pub mod logging;

// Re-export core types
pub use builtins::*;
pub use config::{LogSettings, RuntimeConfig};
pub use error::{BuiltinError, Result};

/// Runtime initialization: logging from the environment, then the built-ins
pub fn init() {
    logging::init();
    builtins::init();
}

/// Runtime initialization with an explicit configuration
pub fn init_with_config(config: &RuntimeConfig) {
    logging::init_with_config(config);
    builtins::init();
}

/// Runtime cleanup
pub fn cleanup() {
    builtins::cleanup();
}
