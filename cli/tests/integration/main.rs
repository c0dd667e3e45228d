//! Integration tests for agentprov CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior against
//! a local one-shot HTTP server and a stub installer script.
