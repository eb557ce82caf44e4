mod activity_tests;
mod history_tests;
mod home_tests;
mod spec_tests;
mod submit_tests;
