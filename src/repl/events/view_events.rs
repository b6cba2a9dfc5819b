//! # View Events
//!
//! Events related to view updates. These drive selective redrawing of the
//! calculator frame.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (startup, terminal resize)
    FullRedrawRequired,

    /// Operation line and display need redrawing
    DisplayUpdateRequired,

    /// Status bar needs updating
    StatusBarUpdateRequired,
}
