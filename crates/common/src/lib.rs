//! Shared wire types and process plumbing for the hello demo.
//!
//! The backend serializes [`HealthResponse`] and [`HelloResponse`]; the
//! frontend deserializes [`HelloResponse`]. Both binaries set up logging,
//! metrics and shutdown through [`telemetry`].

pub mod telemetry;
pub mod types;

pub use types::{HEALTH_PATH, HELLO_MESSAGE, HELLO_PATH, HealthResponse, HelloResponse};
