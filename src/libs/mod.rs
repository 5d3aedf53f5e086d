pub mod config;
pub mod logger;
pub mod moac;
pub mod writing;
