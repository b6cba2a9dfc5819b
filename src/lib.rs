//! # soapcalc - Terminal Calculator over SOAP
//!
//! A four-function calculator whose arithmetic is performed by a remote SOAP
//! web service. Key presses drive a small input state machine; evaluating
//! sends both operands to the service and shows the result it returns.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│  Models  │
//! │             │              │              │              │          │
//! │ - Terminal  │              │ - Session    │              │ - Entry  │
//! │ - Rendering │              │ - Status     │              │ - Status │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                 ▲        │
//!                        Commands │        │ spawn
//!                                 │        ▼
//!                       ┌──────────────┐  ┌──────────────┐
//!                       │  Controller  │  │   Services   │
//!                       │              │  │              │
//!                       │ - Key map    │  │ - SOAP call  │
//!                       │ - Event loop │  │ - Channel    │
//!                       └──────────────┘  └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod repl;

pub use error::{CalcError, CalcResult};
pub use repl::*;
