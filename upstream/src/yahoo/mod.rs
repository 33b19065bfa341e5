mod api;
pub mod parser;

pub use api::YahooApi;
