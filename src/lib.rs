//! Library exports for the playground client, shared between the binary and tests.

pub mod api;
pub mod config;
pub mod controllers;
pub mod models;
pub mod shell;
pub mod startup;
pub mod state;
pub mod utils;
