pub mod cli;
pub mod clients;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod models;
