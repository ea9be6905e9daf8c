//! Behavioral tests for each eviction policy.

mod fifo;
