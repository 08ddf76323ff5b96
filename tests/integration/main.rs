//! Integration tests for greeter.

mod screen_test;
