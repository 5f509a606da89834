//! Path-addressed read and write access into in-memory value trees.

/// Value model, dotted-path resolver engine, and configuration handle.
pub mod config;
