pub mod config;
pub mod core;
pub mod db;
pub mod doc;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod pipeline;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod startup;
pub mod utils;
