//! End-to-end tests through the FlavorBook facade.

mod workflow_tests;
