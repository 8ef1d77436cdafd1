//! Workspace-level integration test package.
//!
//! Carries no code of its own; the golden tests under `tests/` exercise the
//! member crates together.
