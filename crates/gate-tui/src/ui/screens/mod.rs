//! Screen modules for different views

pub mod dashboard;
pub mod login;
