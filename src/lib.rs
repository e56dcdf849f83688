//! MangaMark — bookmark cache and synchronization engine for a manga reading site.
//!
//! The site exposes the user's tracked series only as an HTML listing page, so
//! this crate screen-scrapes that page into an in-memory bookmark store. A
//! sync coordinator arbitrates concurrent refresh requests so that at most one
//! fetch is in flight per cycle, fanning completion out to every queued
//! caller. A flat key-value storage layer persists the bookmark map and the
//! user's options between runs.

pub mod managers;
pub mod services;
pub mod storage;
pub mod types;
