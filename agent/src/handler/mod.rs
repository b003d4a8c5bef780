pub mod dispatch;
pub mod snapshot;
