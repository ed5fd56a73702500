//! Shared type aliases used across the simulation core.

/// Simulated day index. Day 0 is the first day of a run.
pub type Day = u64;

/// Unique identifier for one simulation run.
pub type RunId = String;
