//! Ambient plumbing: panic/error hooks and log setup.

#[cfg(not(tarpaulin_include))]
pub(crate) mod errors;
#[cfg(not(tarpaulin_include))]
pub(crate) mod logging;
