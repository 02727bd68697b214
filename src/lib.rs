//! Post Desk library.
//!
//! A small server-rendered front end for a hosted backend: signed-in users
//! compose, edit and delete short posts with attached image and video links.
//! Row-level authorization lives in the backend; this crate only forwards the
//! caller's token.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod backend;
pub mod components;
pub mod config;
pub mod form;
pub mod posts;
pub mod session;
pub mod web;
