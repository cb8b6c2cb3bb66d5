// src/lib.rs
pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod report;

pub use error::CheckError;
