pub mod admin;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fingerprint;
pub mod history;
pub mod model;
pub mod report;
pub mod storage;
