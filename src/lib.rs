pub mod app;
pub mod config;
pub mod estimation;
pub mod logging;
pub mod presentation;
pub mod sources;
pub mod tasks;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
