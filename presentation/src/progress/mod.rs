//! Progress reporters for the fallback loop

pub mod reporter;
