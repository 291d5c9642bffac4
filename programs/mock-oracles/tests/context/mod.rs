pub mod oracle_test_context;

pub use oracle_test_context::*;
