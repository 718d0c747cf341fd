//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - integration: full press/move/release sequences through the agent
//! - unit: single-component tests against the public API

mod unit;
