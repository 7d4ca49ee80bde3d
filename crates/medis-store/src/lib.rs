#![forbid(unsafe_code)]
#![warn(clippy::all)]

//! Local storage for the portal prototype: opaque JSON blobs keyed by
//! fixed string names, with a typed facade that falls back to defaults
//! instead of surfacing storage failures.

pub mod blob;
pub mod keys;
pub mod portal;
pub mod seed;

pub use blob::*;
pub use keys::*;
pub use portal::*;
pub use seed::*;
