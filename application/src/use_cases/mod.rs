//! Use cases (application services)

pub mod confirm_and_dispatch;
pub mod dispatch_tool;
