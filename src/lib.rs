//! Timetable Scraper - structured schedules from a university timetable portal
//!
//! Given a portal session cookie, the crate discovers every academic session
//! listed on the portal, fetches each session's timetable concurrently, parses
//! the HTML table into subjects with weekly time slots, and returns the
//! surviving sessions sorted newest first.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
