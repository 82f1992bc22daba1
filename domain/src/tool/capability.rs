//! Capability abstraction
//!
//! A [`Capability`] is one concrete host operation (launch a program, open the
//! file browser, shut down). The dispatcher only ever sees this trait;
//! implementations live in the infrastructure layer and are registered by name
//! at start-up.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               ToolDispatcher                 │
//! │  (gate: validate → confirm → audit → run)    │
//! └──────────────────────────────────────────────┘
//!                      │ get(name)
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │             CapabilityRegistry               │
//! └──────────────────────────────────────────────┘
//!       │            │            │           │
//!       ▼            ▼            ▼           ▼
//!   launch      explorer     calculator   shutdown
//! ```

use async_trait::async_trait;
use thiserror::Error;

use super::entities::CapabilityDescriptor;

/// Error raised by a capability or scanner while running
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// A required positional parameter was not supplied
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// The operation is not supported on this platform
    #[error("Unsupported platform: {0}")]
    Unsupported(String),

    /// Spawning or waiting on the OS process failed
    #[error("Process error: {0}")]
    Process(#[from] std::io::Error),

    /// Any other runtime failure
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// One executable host operation.
///
/// `execute` receives positional parameters already projected from the
/// invocation's named arguments. `Ok(false)` means the operation ran but
/// reported failure; `Err` means it could not run at all. The dispatcher
/// treats both the same way towards its caller.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Name, description and elevation flag
    fn descriptor(&self) -> &CapabilityDescriptor;

    fn name(&self) -> &str {
        &self.descriptor().name
    }

    fn description(&self) -> &str {
        &self.descriptor().description
    }

    fn requires_elevation(&self) -> bool {
        self.descriptor().requires_elevation
    }

    async fn execute(&self, parameters: &[String]) -> Result<bool, CapabilityError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoCapability {
        descriptor: CapabilityDescriptor,
    }

    #[async_trait]
    impl Capability for EchoCapability {
        fn descriptor(&self) -> &CapabilityDescriptor {
            &self.descriptor
        }

        async fn execute(&self, parameters: &[String]) -> Result<bool, CapabilityError> {
            match parameters.first() {
                Some(p) if !p.is_empty() => Ok(true),
                Some(_) => Ok(false),
                None => Err(CapabilityError::MissingParameter("target")),
            }
        }
    }

    fn echo() -> EchoCapability {
        EchoCapability {
            descriptor: CapabilityDescriptor::new("echo", "Echo a parameter"),
        }
    }

    #[test]
    fn test_descriptor_accessors() {
        let cap = echo();
        assert_eq!(cap.name(), "echo");
        assert_eq!(cap.description(), "Echo a parameter");
        assert!(!cap.requires_elevation());
    }

    #[tokio::test]
    async fn test_execute_results() {
        let cap = echo();
        assert!(cap.execute(&["x".to_string()]).await.unwrap());
        assert!(!cap.execute(&[String::new()]).await.unwrap());

        let err = cap.execute(&[]).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing parameter: target");
    }
}
