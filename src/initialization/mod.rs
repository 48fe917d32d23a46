//! Initialization of shared resources: logger and HTTP clients.

mod client;
mod logger;

pub use client::{init_body_client, init_probe_client};
pub use logger::init_logger_with;
