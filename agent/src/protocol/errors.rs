//! Standard and application JSON-RPC 2.0 error codes.

pub use filemenu_core::protocol::errors::*;
