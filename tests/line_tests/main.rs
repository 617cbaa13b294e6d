//! Line Store tests

mod buffer_tests;
mod file_tests;
