pub mod clock;
pub mod config;
pub mod controller;
pub mod logging;
pub mod notification;
pub mod plain;
pub mod sanitize;
pub mod session;
pub mod timer;
pub mod ui;
pub mod view;
