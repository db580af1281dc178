//! Login, registration and session checks.
//!
//! Expected rejections (unknown email, wrong password, malformed input) are
//! reported as status codes; only infrastructure faults surface as errors.

pub mod errors;
pub mod models;
pub mod ports;
pub mod service;
