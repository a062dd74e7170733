//! Protection-window tests.
//!
//! The in-memory engine's explicit `collect()` simulates the runtime
//! collecting at the worst possible moment; these tests pin down the
//! guarantee that a freshly allocated object survives from allocation
//! until it is anchored into a parent or its owning view is dropped.
