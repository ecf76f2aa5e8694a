//! Core domain model for marquee.
//!
//! This crate defines the uniform `Movie` record shared by the fetch and
//! submission paths, and the `FetchState` machine that drives the list
//! view through its loading/error/list/empty renderings.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod model;
pub mod state;

pub use model::{Movie, MovieDraft, MovieId};
pub use state::{FetchState, ViewContent, EMPTY_MESSAGE};
