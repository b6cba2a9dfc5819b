//! # ViewModel Module
//!
//! Modular ViewModel implementation split into focused responsibilities.

mod core;
mod evaluation_manager;
mod input_manager;


// Re-export the main ViewModel
pub use self::core::ViewModel;
pub use evaluation_manager::IN_FLIGHT_MESSAGE;
