// src/services/mod.rs

//! External service clients.

mod client;

pub use client::{EdgarClient, TextFetcher};
