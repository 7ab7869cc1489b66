// src/types/mod.rs

pub mod snapshot;
pub mod trade;
