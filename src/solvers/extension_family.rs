use crate::aa::{AAFramework, AcceptanceMode, Argument, ArgumentSubset, LabelType};

/// The extensions of a framework under some semantics.
///
/// Extensions are sorted by increasing size, then by lexicographic order of their sorted labels.
/// A family may be empty, meaning the framework has no extension under the semantics.
///
/// By convention, no argument is skeptically accepted by an empty family.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionFamily {
    extensions: Vec<ArgumentSubset>,
}

impl ExtensionFamily {
    pub(crate) fn new(extensions: Vec<ArgumentSubset>) -> Self {
        Self { extensions }
    }

    /// Returns the number of extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` iff there is no extension.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Iterates over the extensions.
    pub fn iter(&self) -> impl Iterator<Item = &ArgumentSubset> + '_ {
        self.extensions.iter()
    }

    /// Returns the extensions as a slice.
    pub fn as_slice(&self) -> &[ArgumentSubset] {
        &self.extensions
    }

    /// Returns an extension containing the argument, if any.
    pub fn credulous_witness(&self, id: usize) -> Option<&ArgumentSubset> {
        self.extensions.iter().find(|e| e.contains(id))
    }

    /// Returns an extension that does not contain the argument, if any.
    pub fn skeptical_counterexample(&self, id: usize) -> Option<&ArgumentSubset> {
        self.extensions.iter().find(|e| !e.contains(id))
    }

    /// Returns `true` iff at least one extension contains the argument.
    pub fn is_credulously_accepted(&self, id: usize) -> bool {
        self.credulous_witness(id).is_some()
    }

    /// Returns `true` iff there is at least one extension and all the extensions contain the argument.
    pub fn is_skeptically_accepted(&self, id: usize) -> bool {
        !self.is_empty() && self.skeptical_counterexample(id).is_none()
    }

    /// Checks the acceptance of an argument given the acceptance mode.
    pub fn accepts(&self, id: usize, mode: AcceptanceMode) -> bool {
        match mode {
            AcceptanceMode::Credulous => self.is_credulously_accepted(id),
            AcceptanceMode::Skeptical => self.is_skeptically_accepted(id),
        }
    }

    /// Translates the extensions into sorted lists of arguments.
    pub fn to_arguments<'a, T>(&self, af: &'a AAFramework<T>) -> Vec<Vec<&'a Argument<T>>>
    where
        T: LabelType,
    {
        self.extensions
            .iter()
            .map(|e| af.subset_arguments(e))
            .collect()
    }

    /// Checks the credulous acceptance of an argument given by its label, and provides a witness extension if it is accepted.
    ///
    /// Labels unknown to the framework are not accepted.
    pub(crate) fn credulous_certificate<'a, T>(
        &self,
        af: &'a AAFramework<T>,
        arg: &T,
    ) -> (bool, Option<Vec<&'a Argument<T>>>)
    where
        T: LabelType,
    {
        let witness = af
            .argument_set()
            .get_argument_index(arg)
            .ok()
            .and_then(|id| self.credulous_witness(id));
        match witness {
            Some(w) => (true, Some(af.subset_arguments(w))),
            None => (false, None),
        }
    }

    /// Checks the skeptical acceptance of an argument given by its label, and provides a counterexample extension if it is not accepted.
    ///
    /// The counterexample is `None` if the family is empty.
    /// Labels unknown to the framework are not accepted.
    pub(crate) fn skeptical_certificate<'a, T>(
        &self,
        af: &'a AAFramework<T>,
        arg: &T,
    ) -> (bool, Option<Vec<&'a Argument<T>>>)
    where
        T: LabelType,
    {
        let id = match af.argument_set().get_argument_index(arg) {
            Ok(id) => id,
            Err(_) => {
                return (
                    false,
                    self.extensions.first().map(|e| af.subset_arguments(e)),
                )
            }
        };
        if self.is_skeptically_accepted(id) {
            (true, None)
        } else {
            (
                false,
                self.skeptical_counterexample(id)
                    .map(|e| af.subset_arguments(e)),
            )
        }
    }
}
