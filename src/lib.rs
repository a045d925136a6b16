//! Confpanel Library
//!
//! This library provides core functionality for the Confpanel application:
//! a typed form model over bot automation configuration documents, the
//! schema that drives it, and the web API that persists configurations.

// Module declarations
pub mod client;
pub mod constants;
pub mod form;
pub mod path;
pub mod schema;
pub mod tui;
pub mod web;
