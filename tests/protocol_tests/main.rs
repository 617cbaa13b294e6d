//! Protocol and shell tests
