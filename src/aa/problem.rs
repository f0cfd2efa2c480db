use anyhow::{anyhow, Context, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum Semantics {
    /// The complete semantics
    CO,
    /// The stable semantics
    ST,
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "co" => Ok(Semantics::CO),
            "st" => Ok(Semantics::ST),
            _ => Err(anyhow!(r#"undefined semantics "{}""#, value)),
        }
    }
}

/// The way an argument must be accepted by the extensions of a semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceptanceMode {
    /// Accepted by at least one extension
    Credulous,
    /// Accepted by all the extensions, provided there is at least one
    Skeptical,
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum Query {
    /// Enumerate the extensions
    SE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns the acceptance mode checked by this query, if any.
    pub fn acceptance_mode(&self) -> Option<AcceptanceMode> {
        match self {
            Query::SE => None,
            Query::DC => Some(AcceptanceMode::Credulous),
            Query::DS => Some(AcceptanceMode::Skeptical),
        }
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "se" => Ok(Query::SE),
            "dc" => Ok(Query::DC),
            "ds" => Ok(Query::DS),
            _ => Err(anyhow!(r#"undefined query "{}""#, value)),
        }
    }
}

/// Iterates over the problem strings (like `DC-CO`) handled by the library.
///
/// # Example
///
/// ```
/// # use exaf::aa::iter_problem_strings;
/// assert_eq!(6, iter_problem_strings().count());
/// assert!(iter_problem_strings().any(|p| p == "SE-ST"));
/// ```
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Query::iter().flat_map(|q| {
        Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref()))
    })
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// This functions reads a problem string following the format in ICCMA competitions.
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = Semantics::try_from(&problem[1 + n..]).with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_problem_ok() {
        assert_eq!(
            (Query::SE, Semantics::ST),
            read_problem_string("SE-ST").unwrap()
        );
        assert_eq!(
            (Query::DS, Semantics::CO),
            read_problem_string("ds-co").unwrap()
        );
    }

    #[test]
    fn test_read_problem_unknown_query() {
        assert!(read_problem_string("foo-ST").is_err());
    }

    #[test]
    fn test_read_problem_unknown_semantics() {
        assert!(read_problem_string("SE-PR").is_err());
        assert!(read_problem_string("SE-GR").is_err());
    }

    #[test]
    fn test_read_problem_no_hyphen() {
        assert!(read_problem_string("SEST").is_err());
    }

    #[test]
    fn test_problem_strings() {
        let mut problems = iter_problem_strings().collect::<Vec<String>>();
        problems.sort_unstable();
        assert_eq!(
            vec!["DC-CO", "DC-ST", "DS-CO", "DS-ST", "SE-CO", "SE-ST"],
            problems
        );
    }

    #[test]
    fn test_acceptance_mode() {
        assert_eq!(None, Query::SE.acceptance_mode());
        assert_eq!(Some(AcceptanceMode::Credulous), Query::DC.acceptance_mode());
        assert_eq!(Some(AcceptanceMode::Skeptical), Query::DS.acceptance_mode());
    }
}
