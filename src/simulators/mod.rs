// src/simulators/mod.rs

pub mod gbm;
