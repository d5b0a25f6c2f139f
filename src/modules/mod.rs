pub mod call_site;
pub mod config;
pub mod line;
pub mod logger;
