//! Dispatcher and lifecycle tests.
