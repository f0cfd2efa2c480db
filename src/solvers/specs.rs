use crate::aa::{Argument, LabelType};

/// A trait for solvers able to compute all the extensions.
pub trait ExtensionEnumerator<T>
where
    T: LabelType,
{
    /// Computes all the extensions.
    ///
    /// Each extension is returned as a vector of arguments sorted by their labels.
    /// Extensions are sorted by increasing size, then by lexicographic order.
    /// In case the problem admits no extension, the returned vector is empty.
    fn enumerate_extensions(&mut self) -> Vec<Vec<&Argument<T>>>;
}

/// A trait for solvers able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument.
    fn is_credulously_accepted(&mut self, arg: &T) -> bool;

    /// Checks the credulous acceptance of an argument, and provide a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension containing the argument.
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &T,
    ) -> (bool, Option<Vec<&Argument<T>>>);
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
///
/// No argument is skeptically accepted when there is no extension.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument.
    fn is_skeptically_accepted(&mut self, arg: &T) -> bool;

    /// Checks the skeptical acceptance of an argument, and provide a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`, or if there is no extension.
    /// Otherwise, the certificate is an extension that does not contain the argument.
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &T,
    ) -> (bool, Option<Vec<&Argument<T>>>);
}
