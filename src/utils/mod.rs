//! Utility modules
//!
//! - **logging**: subscriber setup and the failure-log throttle

pub mod logging;
