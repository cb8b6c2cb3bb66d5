// src/api/mod.rs
mod client;

pub use client::{AuthToken, AuthenticationError, GridClient, HealthFetchError};
