mod capture_tests;
mod provider_status_tests;
mod render_tests;
