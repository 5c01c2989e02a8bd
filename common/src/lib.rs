//! Types and state shared by the certificate request client.
//!
//! Everything here is target independent: the frontend compiles it to wasm and
//! drives it from browser callbacks, while the unit tests run it natively.

pub mod api;
pub mod error;
pub mod model;
pub mod requests;
pub mod responses;
pub mod validation;
pub mod workflow;
