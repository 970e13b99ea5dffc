// src/utils/mod.rs

pub mod pagination;
