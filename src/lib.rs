pub mod config;
pub mod http_probe;
pub mod methods;
pub mod report;
pub mod runner;
