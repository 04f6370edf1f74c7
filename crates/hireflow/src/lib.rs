//! Recruiting tracker core: candidates, job openings and the applications linking
//! them, kept mutually consistent under edits and deletes.

pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod telemetry;
