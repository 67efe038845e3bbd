//! Utilities
//!
//! Common utilities used throughout the relay.

pub mod error;
pub mod time;

pub use error::*;
pub use time::*;
