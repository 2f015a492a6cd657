//! Adapters: concrete implementations of the ports.
//!
//! The in-memory family backs tests and the demo binary; the filesystem
//! family handles downloads when running natively.

pub mod fs;
pub mod memory;
