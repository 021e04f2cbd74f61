mod setup_tests;
mod support;
