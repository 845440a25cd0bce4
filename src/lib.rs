// src/lib.rs

//! EDGAR Daily Ingest Library

pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
