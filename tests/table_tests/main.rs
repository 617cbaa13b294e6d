//! Table Store tests

mod common;
