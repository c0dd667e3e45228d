//! Unit tests for agentprov CLI
//!
//! These tests use recording fakes for every port and run fast without
//! network or process I/O.

mod helpers;
mod property_tests;
mod validator;
