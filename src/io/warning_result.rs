/// A value read from an input, along with the warnings raised while reading it.
///
/// Reading never fails at this level; a warned value is still a usable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WarningResult<T> {
    value: T,
    warnings: Vec<String>,
}

impl<T> WarningResult<T> {
    pub(crate) fn ok(value: T) -> Self {
        Self {
            value,
            warnings: vec![],
        }
    }

    pub(crate) fn warned(value: T, warning: String) -> Self {
        Self {
            value,
            warnings: vec![warning],
        }
    }

    /// Returns the value, passing the warnings (if any) to the callback.
    pub(crate) fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<String>),
    {
        if !self.warnings.is_empty() {
            f(self.warnings);
        }
        self.value
    }

    /// Pairs two values, concatenating their warnings.
    pub(crate) fn zip<U>(self, other: WarningResult<U>) -> WarningResult<(T, U)> {
        let mut warnings = self.warnings;
        warnings.extend(other.warnings);
        WarningResult {
            value: (self.value, other.value),
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_without_warnings() {
        let mut consumed = false;
        assert_eq!(1, WarningResult::ok(1).consume_warnings(|_| consumed = true));
        assert!(!consumed);
    }

    #[test]
    fn test_consume_with_warnings() {
        let mut consumed = vec![];
        assert_eq!(
            1,
            WarningResult::warned(1, "w".to_string()).consume_warnings(|w| consumed = w)
        );
        assert_eq!(vec!["w".to_string()], consumed);
    }

    #[test]
    fn test_zip_keeps_warning_order() {
        let zipped = WarningResult::warned("a", "w1".to_string())
            .zip(WarningResult::ok("b"))
            .zip(WarningResult::warned("c", "w2".to_string()));
        let mut consumed = vec![];
        assert_eq!(
            (("a", "b"), "c"),
            zipped.consume_warnings(|w| consumed = w)
        );
        assert_eq!(vec!["w1".to_string(), "w2".to_string()], consumed);
    }

    #[test]
    fn test_zip_without_warnings() {
        let zipped = WarningResult::ok(1).zip(WarningResult::ok(2));
        assert_eq!(WarningResult::ok((1, 2)), zipped);
    }
}
