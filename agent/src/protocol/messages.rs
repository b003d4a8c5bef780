//! JSON-RPC 2.0 message types shared with the core crate.

pub use filemenu_core::protocol::messages::*;
