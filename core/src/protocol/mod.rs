//! JSON-RPC 2.0 protocol types shared between the core and the agent.

pub mod errors;
pub mod messages;
