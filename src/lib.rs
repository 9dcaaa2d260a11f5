pub mod api;
pub mod cli;
pub mod commands;
pub mod device;
pub mod reading;
pub mod render;
pub mod schema;
pub mod session;
