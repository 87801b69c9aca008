// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod providers;
pub mod report;
pub mod rubric;
pub mod runner;
pub mod scoring;
