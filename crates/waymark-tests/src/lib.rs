//! Shared fixtures for the Waymark integration and property tests.

pub mod helpers;
