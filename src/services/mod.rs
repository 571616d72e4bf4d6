pub mod dataset;
pub mod gateway;
pub mod inference;
pub mod provider;
pub mod relay;
