// src/agents/mod.rs

pub mod policy;
pub mod profile;
pub mod trader;
