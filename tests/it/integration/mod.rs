//! Integration tests for the gesture engine.
//!
//! These drive the engine with native event sequences over an in-memory
//! scene and check what subscribers receive.

mod gesture_flow_tests;
