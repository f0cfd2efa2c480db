//! Solvers for the complete and stable semantics.
//!
//! Extensions are computed by an exhaustive enumeration of candidate sets filtered by a semantics predicate.

mod acceptance;
pub use acceptance::AcceptanceQueryEvaluator;

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

pub mod enumeration;
pub use enumeration::EnumerationOptions;
pub use enumeration::EnumerationStrategy;

mod extension_family;
pub use extension_family::ExtensionFamily;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;
