//! Configuration

pub mod environment;

pub use environment::EnvironmentConfig;
