//! # Gigboard Common Library
//!
//! Shared code for the Gigboard listing service:
//! - Error types
//! - Configuration resolution
//! - Database initialization, schema, and record models
//! - Genre storage encoding
//! - Show time classification and display formatting

pub mod config;
pub mod db;
pub mod error;
pub mod genres;
pub mod showtime;

pub use error::{Error, Result};
