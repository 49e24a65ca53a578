//! Configuration for the concierge calendar engine.

mod settings;

pub use settings::{Config, DragConfig, ViewConfig};
