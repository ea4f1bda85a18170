//! Structural checks over the test suite
