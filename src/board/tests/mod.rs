//! Unit tests for the board bounded context.

mod board_tests;
