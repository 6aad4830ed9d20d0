#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
