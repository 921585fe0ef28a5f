//! Type-check port - interface for the external static type checker

use async_trait::async_trait;
use domain::TypeCheckOutcome;

/// Port for running the external type checker
///
/// Infallible by contract: an adapter that cannot invoke the tool at all
/// (missing binary, crash) must return a failed outcome carrying the error
/// text as the report, never an `Err`.
#[async_trait]
pub trait TypeCheckPort: Send + Sync {
    /// Run the checker against the working tree
    async fn run(&self) -> TypeCheckOutcome;
}
