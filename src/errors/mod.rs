//! Error types for the front end.
//!
//! This module defines the errors produced while parsing. It includes:
//!
//! - Error structures with source position information
//! - The syntax / unknown-primary classification of each failure
//! - Helpful suggestions shown alongside a diagnostic

pub mod errors;
