//! Gate TUI Library
//!
//! Terminal front end for the credential gate: a login form, a modal
//! rejection notice, and the protected dashboard it guards.

pub mod app;
pub mod logging;
pub mod ui;

pub use app::App;
