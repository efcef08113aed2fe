//! Integration test binary.
//!
//! One module per tested area; shared fixture and CLI plumbing lives
//! in `helpers`.

mod helpers;

mod cli_test;
mod session_test;
mod show_test;
mod transform_test;
