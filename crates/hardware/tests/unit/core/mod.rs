//! Unit tests for core processor components.
