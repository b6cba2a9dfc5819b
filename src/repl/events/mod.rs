//! # Events Module
//!
//! Re-exports all event system components: calculator actions coming in
//! from key bindings and view events going out to the renderer.

pub mod types;
pub mod view_events;

// Re-export all types for easy access
pub use types::CalcAction;
pub use view_events::ViewEvent;
