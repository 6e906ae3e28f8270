pub mod auth;
pub mod chat;
pub mod config;
pub mod theme;
pub mod types;

#[cfg(any(feature = "desktop", feature = "mobile"))]
pub mod ui;
#[cfg(any(feature = "desktop", feature = "mobile"))]
pub mod views;
