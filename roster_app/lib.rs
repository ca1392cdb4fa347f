pub mod config;
pub mod context;
pub mod endpoints;
pub mod logging;
pub mod repository;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod test_utils;
