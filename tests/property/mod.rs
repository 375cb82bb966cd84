//! Property-based tests for plan building

mod plan_properties;
