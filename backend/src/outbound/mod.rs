//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-memory entity stores (the only persistence this system
//!   has; everything resets on restart)
//! - **notify**: notification sinks standing in for the UI toast surface
//!
//! Adapters are thin translators and contain no business logic.

pub mod memory;
pub mod notify;
