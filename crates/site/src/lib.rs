//! ScaleHouse site library.
//!
//! This crate provides the site functionality as a library, allowing it
//! to be tested and reused (the CLI uses it for migrations and admin
//! account management).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
