pub mod config;
pub mod contact;
pub mod error;
pub mod models;
pub mod puppet;
pub mod session;
pub mod utils;

#[cfg(test)]
pub mod mock;
