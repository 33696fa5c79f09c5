//! Unit tests for the CRM bounded context.

mod domain_tests;
