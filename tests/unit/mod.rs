//! Unit tests for individual components

mod audit_test;
mod builders_test;
mod config_test;
mod intake_test;
mod report_test;
mod util_test;
