//! Remote catalog access for marquee.
//!
//! Implements the endpoint client, the payload transformer that maps the
//! two backend shapes into the uniform `Movie` record, and the fetch
//! controller that drives the list view's state machine.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod payload;

pub use client::{CatalogClient, DEFAULT_ENDPOINT};
pub use config::Config;
pub use controller::FetchController;
pub use error::{ApiError, ApiResult};
pub use payload::{normalize, MoviesPayload};
