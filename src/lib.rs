pub mod config;
pub mod error;
pub mod http_client;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
