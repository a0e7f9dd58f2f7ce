pub mod api;
pub mod blockfrost;
pub mod config;
pub mod datasource;
pub mod risk;
