pub mod aliases;
pub mod app_error;
pub mod app_state;
pub mod availability;
pub mod booking;
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod directory;
pub mod models;
pub mod routes;
pub mod schema;
pub mod swagger;
