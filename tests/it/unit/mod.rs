//! Unit tests for pointer-agent.

mod buttons_tests;
mod perf_tests;
mod settings_tests;
