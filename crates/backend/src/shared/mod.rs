pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod http;
pub mod percentile;
pub mod state;
