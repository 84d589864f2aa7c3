//! Extracurricular activity signups for Mergington High School.
//!
//! Activities live in an in-memory [`database::ActivityStore`] seeded at
//! startup. Students sign up and unregister through a small JSON API served
//! by axum, next to a static front-end page.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
