pub mod capture;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod pipeline;
pub mod sink;
