pub mod config;
pub mod demo;
pub mod extract;
pub mod generator;
pub mod history;
pub mod http_client;
pub mod model;
pub mod predictions;
pub mod provider;
pub mod state;
pub mod store;
pub mod validate;
