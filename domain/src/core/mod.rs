//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`audit::AuditEntry`]: one append-only audit record
//! - [`string::truncate`]: UTF-8 safe truncation for previews

pub mod audit;
pub mod error;
pub mod string;
