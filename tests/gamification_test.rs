//! Integration tests for the gamification core
//!
//! Covers end-to-end award/unlock flows against the built-in table,
//! persistence round trips through SQLite, toast timing and the level
//! table properties.

mod common;

mod gamification_test {
    mod persistence;
    mod properties;
    mod queue_timing;
    mod scenarios;
}
