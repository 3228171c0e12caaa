//! `champion` validates competitive Pokemon team configurations and computes
//! their effective battle stats.
//!
//! The [`model`] module describes the records exchanged with the rest of the
//! site; [`validate`] checks them against a set of [`Rules`], and [`stats`]
//! turns a valid configuration into final stat values.

#![warn(missing_docs, unused)]

pub mod api;
pub mod error;
pub mod model;
pub mod stats;
pub mod validate;

pub use api::ApiResponse;
pub use api::PaginatedResponse;
pub use error::Error;
pub use error::ErrorKind;
pub use validate::Rules;
pub use validate::Validator;
