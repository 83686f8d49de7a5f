//! Course catalogue service
//!
//! An in-memory course table exposed over HTTP with JSON payloads.

pub mod modules;

pub use modules::*;
