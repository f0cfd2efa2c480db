use super::{
    CompleteSemanticsSolver, CredulousAcceptanceComputer, EnumerationOptions, ExtensionFamily,
    SkepticalAcceptanceComputer, StableSemanticsSolver,
};
use crate::aa::{AAFramework, AcceptanceMode, Argument, LabelType, Semantics};

/// Answers acceptance queries for both the complete and the stable semantics on a single framework.
///
/// Each family of extensions is computed at most once, at the first query involving its semantics.
pub struct AcceptanceQueryEvaluator<'a, T>
where
    T: LabelType,
{
    complete: CompleteSemanticsSolver<'a, T>,
    stable: StableSemanticsSolver<'a, T>,
}

impl<'a, T> AcceptanceQueryEvaluator<'a, T>
where
    T: LabelType,
{
    /// Builds a new evaluator using the default enumeration options.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_options(af, EnumerationOptions::default())
    }

    /// Builds a new evaluator using the provided enumeration options.
    pub fn new_with_options(af: &'a AAFramework<T>, options: EnumerationOptions) -> Self {
        Self {
            complete: CompleteSemanticsSolver::new_with_options(af, options),
            stable: StableSemanticsSolver::new_with_options(af, options),
        }
    }

    /// Returns the complete extensions.
    pub fn complete_extensions(&mut self) -> &ExtensionFamily {
        self.complete.complete_extensions()
    }

    /// Returns the stable extensions.
    pub fn stable_extensions(&mut self) -> &ExtensionFamily {
        self.stable.stable_extensions()
    }

    /// Returns the extensions under the given semantics.
    pub fn extensions(&mut self, semantics: Semantics) -> &ExtensionFamily {
        match semantics {
            Semantics::CO => self.complete_extensions(),
            Semantics::ST => self.stable_extensions(),
        }
    }

    /// Checks whether an argument is accepted under the given semantics and acceptance mode.
    ///
    /// Labels unknown to the framework are never accepted.
    pub fn accepts(&mut self, arg: &T, semantics: Semantics, mode: AcceptanceMode) -> bool {
        self.accepts_with_certificate(arg, semantics, mode).0
    }

    /// Same as [accepts](Self::accepts), but also provides a certificate.
    ///
    /// For credulous acceptance, the certificate is an extension containing the argument.
    /// For skeptical acceptance, it is an extension that does not contain it.
    pub fn accepts_with_certificate(
        &mut self,
        arg: &T,
        semantics: Semantics,
        mode: AcceptanceMode,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        match (semantics, mode) {
            (Semantics::CO, AcceptanceMode::Credulous) => {
                self.complete.is_credulously_accepted_with_certificate(arg)
            }
            (Semantics::CO, AcceptanceMode::Skeptical) => {
                self.complete.is_skeptically_accepted_with_certificate(arg)
            }
            (Semantics::ST, AcceptanceMode::Credulous) => {
                self.stable.is_credulously_accepted_with_certificate(arg)
            }
            (Semantics::ST, AcceptanceMode::Skeptical) => {
                self.stable.is_skeptically_accepted_with_certificate(arg)
            }
        }
    }
}
