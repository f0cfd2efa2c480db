use super::enumeration::{self, EnumerationOptions};
use super::specs::{CredulousAcceptanceComputer, ExtensionEnumerator, SkepticalAcceptanceComputer};
use super::ExtensionFamily;
use crate::aa::{properties, AAFramework, Argument, LabelType};
use log::info;

/// An exhaustive solver for the complete semantics.
///
/// A set of arguments is a complete extension if it is admissible and if it contains all the arguments it defends,
/// i.e. it is a fixpoint of the characteristic function of the framework.
///
/// The extensions are computed once, at the first request, and kept for the following ones.
/// The certificate provided in case an argument is credulously accepted is a complete extension containing the argument;
/// the one provided in case an argument is not skeptically accepted is a complete extension without the argument.
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    options: EnumerationOptions,
    family: Option<ExtensionFamily>,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the complete semantics, using the default enumeration options.
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::{AAFramework, ArgumentSet, LabelType};
    /// # use exaf::solvers::{CredulousAcceptanceComputer, CompleteSemanticsSolver};
    /// fn check_credulous_acceptance<T>(af: &AAFramework<T>, arg: &T) where T: LabelType {
    ///     let mut solver = CompleteSemanticsSolver::new(af);
    ///     if solver.is_credulously_accepted(arg) {
    ///         println!("there exists complete extension(s) with {}", arg)
    ///     } else {
    ///         println!("there is no complete extension with {}", arg)
    ///     }
    /// }
    /// # let arg_set = ArgumentSet::new_with_labels(&["a"]);
    /// # let af = AAFramework::new_with_argument_set(arg_set);
    /// # check_credulous_acceptance(&af, &"a");
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_options(af, EnumerationOptions::default())
    }

    /// Builds a new solver for the complete semantics, using the provided enumeration options.
    pub fn new_with_options(af: &'a AAFramework<T>, options: EnumerationOptions) -> Self {
        Self {
            af,
            options,
            family: None,
        }
    }

    /// Returns the complete extensions of the framework.
    pub fn complete_extensions(&mut self) -> &ExtensionFamily {
        let af = self.af;
        let options = self.options;
        self.family.get_or_insert_with(|| {
            let extensions =
                enumeration::enumerate(af, &options, |s| properties::is_complete(af, s));
            info!("found {} complete extension(s)", extensions.len());
            ExtensionFamily::new(extensions)
        })
    }
}

impl<T> ExtensionEnumerator<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<Vec<&Argument<T>>> {
        let af = self.af;
        self.complete_extensions().to_arguments(af)
    }
}

impl<T> CredulousAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &T) -> bool {
        self.is_credulously_accepted_with_certificate(arg).0
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &T,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let af = self.af;
        self.complete_extensions().credulous_certificate(af, arg)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &T) -> bool {
        self.is_skeptically_accepted_with_certificate(arg).0
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &T,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let af = self.af;
        self.complete_extensions().skeptical_certificate(af, arg)
    }
}
