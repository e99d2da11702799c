// Library root. The binary entry point is src/main.rs.

pub mod bootstrap;
pub mod config;
pub mod error;
