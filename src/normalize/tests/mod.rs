//! Unit tests for the text normalizers.

mod email_tests;
