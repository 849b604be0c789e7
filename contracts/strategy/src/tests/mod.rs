mod admin_tests;
mod emergency_tests;
