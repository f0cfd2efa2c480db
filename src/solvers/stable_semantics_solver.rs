use super::enumeration::{self, EnumerationOptions};
use super::specs::{CredulousAcceptanceComputer, ExtensionEnumerator, SkepticalAcceptanceComputer};
use super::ExtensionFamily;
use crate::aa::{properties, AAFramework, Argument, LabelType};
use log::info;

/// An exhaustive solver for the stable semantics.
///
/// A stable extension is a conflict-free set of declared arguments attacking every declared argument it does not contain.
/// A framework may have no stable extension at all, in which case no argument is accepted, neither credulously nor skeptically.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    options: EnumerationOptions,
    family: Option<ExtensionFamily>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the stable semantics, using the default enumeration options.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_options(af, EnumerationOptions::default())
    }

    /// Builds a new solver for the stable semantics, using the provided enumeration options.
    pub fn new_with_options(af: &'a AAFramework<T>, options: EnumerationOptions) -> Self {
        Self {
            af,
            options,
            family: None,
        }
    }

    /// Returns the stable extensions of the framework.
    pub fn stable_extensions(&mut self) -> &ExtensionFamily {
        let af = self.af;
        let options = self.options;
        self.family.get_or_insert_with(|| {
            let extensions = enumeration::enumerate(af, &options, |s| properties::is_stable(af, s));
            info!("found {} stable extension(s)", extensions.len());
            ExtensionFamily::new(extensions)
        })
    }
}

impl<T> ExtensionEnumerator<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Vec<Vec<&Argument<T>>> {
        let af = self.af;
        self.stable_extensions().to_arguments(af)
    }
}

impl<T> CredulousAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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
        self.stable_extensions().credulous_certificate(af, arg)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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
        self.stable_extensions().skeptical_certificate(af, arg)
    }
}
