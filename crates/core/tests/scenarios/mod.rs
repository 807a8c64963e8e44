//! End-to-end scenario tests, one module per named scenario.

mod s1_add_latency;
mod s2_multiplier_latency;
mod s3_rotating_register;
mod s4_loop;
mod s5_predicated_store_suppressed;
mod s6_memory_default_read;
