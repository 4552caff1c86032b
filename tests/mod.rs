mod calendar_source_mock;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - calendar_source_mock: An in-memory CalendarSource feeding a full run
// - smoke_tests: Basic functionality tests to ensure nothing is broken
// - suggestion_scenarios: End-to-end suggestion runs over fixed calendars
