pub mod api;
pub mod codec;
pub mod config;
pub mod db;
pub mod error;
pub mod grid;
pub mod ids;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod transfer;
pub mod translator;
