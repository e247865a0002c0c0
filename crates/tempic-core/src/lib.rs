pub mod config;
pub mod logging;

pub mod api;
pub mod host;
pub mod http;
pub mod multipart;
