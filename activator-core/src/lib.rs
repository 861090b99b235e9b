//! Browser-independent pieces of the scroll Activator.
//!
//! The wasm side in `ui` owns the actual `IntersectionObserver` and timers;
//! everything that decides *what* happens lives here so it runs in native
//! tests.

pub mod config;
pub mod counter;
pub mod registry;

pub use config::{ActivatorConfig, ConfigError, DEFAULT_COUNTER_DURATION_MS, DEFAULT_THRESHOLD};
pub use counter::{parse_counter_target, CounterAnimation, CounterStart, CounterTick};
pub use registry::{qualifies, VisibilityRegistry};
