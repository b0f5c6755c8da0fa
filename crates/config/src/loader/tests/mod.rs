//! Tests for the configuration loader.
