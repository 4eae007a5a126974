// Scan API: upload parsing, the validate → extract → score → persist
// pipeline, result storage and the axum handlers on top.

pub mod handlers;
pub mod service;
pub mod store;
pub mod upload;
