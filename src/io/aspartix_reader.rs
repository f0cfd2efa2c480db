use super::{warning_result::WarningResult, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\(([^),]+)\)\.\s*$").unwrap();
    static ref ATT_LINE_PATTERN: Regex =
        Regex::new(r"^\s*att\(([^),]+),([^),]+)\)\.\s*$").unwrap();
}

fn captured_arg(c: &Captures, i: usize) -> Option<WarningResult<String>> {
    let str_arg = c.get(i)?.as_str();
    let trimmed_str_arg = str_arg.trim();
    if trimmed_str_arg.is_empty() {
        None
    } else if trimmed_str_arg.len() == str_arg.len() {
        Some(WarningResult::ok(trimmed_str_arg.to_string()))
    } else {
        Some(WarningResult::warned(
            trimmed_str_arg.to_string(),
            format!(
                r#"argument name "{}" has surrounding spaces; they were removed"#,
                trimmed_str_arg
            ),
        ))
    }
}

fn try_read_arg_line(l: &str) -> Option<WarningResult<String>> {
    let captures = ARG_LINE_PATTERN.captures(l)?;
    captured_arg(&captures, 1)
}

fn try_read_att_line(l: &str) -> Option<WarningResult<(String, String)>> {
    let captures = ATT_LINE_PATTERN.captures(l)?;
    Some(captured_arg(&captures, 1)?.zip(captured_arg(&captures, 2)?))
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// The reader is lenient.
/// Argument and attack lines may come in any order.
/// Blank lines are skipped; other lines that are neither argument nor attack declarations are ignored with a warning.
/// Attacks referencing labels that are never declared are kept, with a warning; the labels become undeclared arguments.
///
/// # Example
///
/// ```
/// # use exaf::aa::AAFramework;
/// # use exaf::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("unreadable AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn(&self, line_index: usize, warning: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line_index, warning.clone()));
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut af = AAFramework::default();
        let mut first_references = vec![];
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let l = line.with_context(|| format!("while reading line with index {}", i))?;
            let warning_consumer = |warnings: Vec<String>| {
                warnings.into_iter().for_each(|w| self.warn(1 + i, w));
            };
            if l.trim().is_empty() {
                continue;
            }
            if let Some(a) = try_read_arg_line(&l) {
                af.new_argument(a.consume_warnings(warning_consumer));
                continue;
            }
            if let Some(result) = try_read_att_line(&l) {
                let (a, b) = result.consume_warnings(warning_consumer);
                for label in [&a, &b] {
                    if af.argument_set().get_argument(label).is_err() {
                        first_references.push((1 + i, label.clone()));
                    }
                }
                af.new_attack(&a, &b);
                continue;
            }
            self.warn(1 + i, format!(r#"ignoring line "{}""#, l.trim()));
        }
        let mut warned = HashSet::new();
        for (line_index, label) in first_references {
            let declared = af
                .argument_set()
                .get_argument(&label)
                .map(|a| a.is_declared())
                .unwrap_or(false);
            if !declared && warned.insert(label.clone()) {
                self.warn(
                    line_index,
                    format!(r#"attack references undeclared argument "{}""#, label),
                );
            }
        }
        Ok(af)
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_declared_argument(&arg.trim().to_string())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_arg_line_pattern_ok() {
        assert!(ARG_LINE_PATTERN.is_match("arg(a)."));
        assert!(ARG_LINE_PATTERN.is_match("    arg(a).   "));
        assert!(ARG_LINE_PATTERN.is_match("arg(1a. )."));
    }

    const WRONG_ARG_LINES: [&str; 7] = [
        "rg(a).",
        "arg(a)",
        "arg().",
        "arga).",
        "arg(a.",
        "arg(a,b).",
        "arg(a).arg(b).",
    ];

    #[test]
    fn test_arg_line_pattern_not_ok() {
        WRONG_ARG_LINES
            .iter()
            .for_each(|p| assert!(!ARG_LINE_PATTERN.is_match(p), "{}", p))
    }

    #[test]
    fn test_try_read_arg_line_ok() {
        let assert_arg_name = |expected: &str, actual| {
            assert_eq!(
                expected.to_string(),
                try_read_arg_line(actual).unwrap().consume_warnings(|_| {})
            );
        };
        assert_arg_name("a", "arg(a).");
        assert_arg_name("a", "arg( a).");
        assert_arg_name("a", "arg( a ).");
        assert_arg_name("a", "    arg(a).   ");
        assert_arg_name("_a", "arg(_a).");
        assert_arg_name("1a", "arg(1a).");
        assert_arg_name("a.b", "arg(a.b).");
    }

    #[test]
    fn test_try_read_arg_line_blank_name() {
        assert!(try_read_arg_line("arg(  ).").is_none());
    }

    #[test]
    fn test_att_line_pattern_ok() {
        assert!(ATT_LINE_PATTERN.is_match("att(a,b)."));
        assert!(ATT_LINE_PATTERN.is_match("    att(a,b).   "));
        assert!(ATT_LINE_PATTERN.is_match("att(1a. ,b)."));
        assert!(ATT_LINE_PATTERN.is_match("att(1a. ,2b.)."));
    }

    const WRONG_ATT_LINES: [&str; 9] = [
        "tt(a,b).",
        "att(a,b)",
        "att().",
        "att(a,).",
        "att(,b).",
        "atta,b).",
        "att(a,b.",
        "att(a,b,c).",
        "att(a,b).att(c,d).",
    ];

    #[test]
    fn test_att_line_pattern_not_ok() {
        WRONG_ATT_LINES
            .iter()
            .for_each(|p| assert!(!ATT_LINE_PATTERN.is_match(p), "{}", p))
    }

    #[test]
    fn test_try_read_att_line_ok() {
        let assert_att_names = |expected0: &str, expected1: &str, actual| {
            assert_eq!(
                (expected0.to_string(), expected1.to_string()),
                try_read_att_line(actual).unwrap().consume_warnings(|_| {})
            );
        };
        assert_att_names("a", "b", "att(a,b).");
        assert_att_names("a", "b", "att( a,b).");
        assert_att_names("a", "b", "att(a , b ).");
        assert_att_names("a", "b", "    att(a,b).   ");
        assert_att_names("a", "a", "att(a,a).");
    }

    fn str_args(af: &AAFramework<String>) -> Vec<String> {
        af.argument_set().iter().map(|s| format!("{}", s)).collect()
    }

    fn str_attacks(af: &AAFramework<String>) -> Vec<String> {
        af.iter_attacks()
            .map(|a| format!("({},{})", a.attacker(), a.attacked()))
            .collect()
    }

    fn read_with_warnings(instance: &str) -> (AAFramework<String>, Vec<(usize, String)>) {
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = AspartixReader::default();
        reader.add_warning_handler(Box::new(move |i, w| {
            warnings_clone.borrow_mut().push((i, w))
        }));
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let warnings = warnings.borrow().clone();
        (af, warnings)
    }

    #[test]
    fn test_read_ok() {
        let (af, warnings) = read_with_warnings("arg(a).\narg(b).\natt(a,b).\n");
        assert_eq!(vec!["a".to_string(), "b".to_string()], str_args(&af));
        assert_eq!(vec!["(a,b)".to_string()], str_attacks(&af));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_read_empty() {
        let (af, warnings) = read_with_warnings("\n");
        assert!(str_args(&af).is_empty());
        assert!(str_attacks(&af).is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_read_arg_after_att() {
        let (af, warnings) = read_with_warnings("arg(a).\natt(a,b).\narg(b).\n");
        assert_eq!(vec!["a".to_string(), "b".to_string()], str_args(&af));
        assert_eq!(vec!["(a,b)".to_string()], str_attacks(&af));
        assert!(warnings.is_empty());
        assert!(af.check_attacks_declared().is_ok());
    }

    #[test]
    fn test_read_ignored_line() {
        let (af, warnings) = read_with_warnings("% comment\narg(a).\nargument(b).\n");
        assert_eq!(vec!["a".to_string()], str_args(&af));
        assert_eq!(
            vec![
                (1, r#"ignoring line "% comment""#.to_string()),
                (3, r#"ignoring line "argument(b).""#.to_string()),
            ],
            warnings
        );
    }

    #[test]
    fn test_read_undeclared_arg_in_att() {
        let (af, warnings) = read_with_warnings("arg(a).\narg(b).\natt(a,c).\natt(c,b).\n");
        assert_eq!(vec!["a".to_string(), "b".to_string()], str_args(&af));
        assert_eq!(vec!["(a,c)".to_string(), "(c,b)".to_string()], str_attacks(&af));
        assert_eq!(
            vec![(3, r#"attack references undeclared argument "c""#.to_string())],
            warnings
        );
        assert!(af.check_attacks_declared().is_err());
    }

    #[test]
    fn test_read_duplicate_lines() {
        let (af, _) = read_with_warnings("arg(a).\narg(a).\natt(a,a).\natt(a,a).\n");
        assert_eq!(1, af.n_arguments());
        assert_eq!(1, af.n_attacks());
    }

    #[test]
    fn test_read_warn_arg_spaces() {
        let (af, warnings) = read_with_warnings("arg( a).\n");
        assert_eq!(vec!["a".to_string()], str_args(&af));
        assert_eq!(
            vec![(
                1,
                r#"argument name "a" has surrounding spaces; they were removed"#.to_string()
            )],
            warnings
        );
    }

    #[test]
    fn test_read_arg_from_str() {
        let instance = "arg(a).\natt(a,a).\natt(a,z).\n";
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        assert_eq!(1, af.n_arguments());
        assert!(reader.read_arg_from_str(&af, "a").is_ok());
        assert!(reader.read_arg_from_str(&af, "b").is_err());
        assert!(reader.read_arg_from_str(&af, "z").is_err());
    }
}
