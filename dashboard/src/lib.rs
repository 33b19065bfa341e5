pub mod config;
pub mod data_provider;
pub mod errors;
pub mod factors;
pub mod keys;
pub mod macro_bundle;
pub mod server;
pub mod state;

#[cfg(test)]
mod keys_test;
