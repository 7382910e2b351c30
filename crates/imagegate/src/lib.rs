//! Top-level facade crate for imagegate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use imagegate_core::*;
}

pub mod gateway {
    pub use imagegate_gateway::*;
}
