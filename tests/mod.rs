//! Test suite for authgate
//!
//! This module organizes all integration and property tests into one binary.

pub mod integration;
