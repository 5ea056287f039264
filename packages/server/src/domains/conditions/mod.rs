//! Conditions domain - read views over skateway sensor windows.

pub mod activities;
pub mod models;
