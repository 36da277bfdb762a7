//! Shared library for Session Master modules
//!
//! Provides the error type, configuration resolution, and the artist
//! domain model used by the web UI microservice.

pub mod config;
pub mod error;
pub mod model;

pub use error::{Error, Result};
