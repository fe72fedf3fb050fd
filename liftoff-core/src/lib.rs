pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod patch;
pub mod report;
pub mod table;

pub use client::{ApiClient, Resource};
pub use error::{Error, Result};
pub use patch::{Candidate, UpdatePatch};
