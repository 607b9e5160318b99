pub mod config;
pub mod extract;
pub mod model;
pub mod output;
