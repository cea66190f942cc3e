// src/core/mod.rs

// This file acts as the root of the `core` module, exposing its sub-modules
// to the crate.

/// Contains all data structures and models used throughout the application,
/// such as `ScanReport`, `Rating`, `RiskLevel`, and the per-checker result
/// structs.
pub mod models;

/// Houses the checker logic (SSL, domain age, HTTP headers) and the
/// orchestrator that runs them.
pub mod scanner;

/// The pure risk-scoring function that folds the checker signals into a
/// weighted score and label.
pub mod scoring;

/// Input normalization and registrable-domain extraction.
pub mod target;

/// The static catalog of finding explanations backing the report output.
pub mod knowledge_base;
