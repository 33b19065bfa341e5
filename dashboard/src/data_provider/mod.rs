mod data_provider;
mod upstream_data_provider;

pub use data_provider::DataProvider;
pub use upstream_data_provider::UpstreamDataProvider;

#[cfg(test)]
pub(crate) mod mock_data_provider;
