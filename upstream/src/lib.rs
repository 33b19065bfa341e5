pub mod blockchain;
pub mod coingecko;
pub mod consts;
pub mod errors;
pub mod fred;
pub mod http;
pub mod mempool;
pub mod models;
pub mod search;
pub mod sentiment;
pub mod yahoo;

pub use errors::{Result, UpstreamError};
pub use http::HttpApi;

#[cfg(test)]
mod http_test;
