pub mod api;
pub mod config;
pub mod controller;
pub mod form;
pub mod helpers;
pub mod models;
pub mod site;
