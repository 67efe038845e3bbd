//! Data Models
//!
//! Contains all data structures used throughout the relay.

pub mod envelope;
pub mod message;
pub mod origin;
pub mod settings;

pub use envelope::*;
pub use message::*;
pub use origin::*;
pub use settings::*;
