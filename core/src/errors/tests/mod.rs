//! Unit tests for error types

mod verify_error_tests;
