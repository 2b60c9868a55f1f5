//! Top-level facade crate for promgate.
//!
//! Re-exports the core types and the bridge library so users can depend on a
//! single crate.

pub mod core {
    pub use promgate_core::*;
}

pub mod bridge {
    pub use promgate_bridge::*;
}
