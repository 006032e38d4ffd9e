//! Web boundary helpers that are not middleware or extractors.

pub mod trace_ctx;
