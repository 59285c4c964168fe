pub mod config;
pub mod logging;

pub mod initials;
pub mod media_url;
