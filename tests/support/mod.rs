// tests/support/mod.rs
// Shared in-memory repositories and builders used by multiple integration
// test binaries. Some symbols are purposely unused in individual test crates,
// so allow dead_code at the module level to keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;

#[allow(unused_imports)]
pub use mocks::*;
