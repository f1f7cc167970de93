//! Fetches TLE element sets for a fixed list of satellites and renders their
//! last 30 days of motion around the Earth as an interactive 3D page.

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod orbit;
pub mod scene;
pub mod web;
