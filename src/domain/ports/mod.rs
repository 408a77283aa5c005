//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the read-only interfaces the scoring services depend on:
//! - BenchmarkRepository: percentile tiers per (industry-channel, metric)
//! - IndustryWeightRepository: metric and channel weights per industry
//! - PsychologyWeightRepository: factor weights per industry
//!
//! The built-in and file-loaded reference catalogs in `infrastructure::reference`
//! implement all three.

pub mod reference_repository;

pub use reference_repository::{
    BenchmarkRepository, IndustryWeightRepository, PsychologyWeightRepository,
};
