use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
///
/// Labels must be totally ordered since extensions are output sorted by their labels,
/// and shareable between threads since frameworks may be read by parallel enumerations.
pub trait LabelType: Clone + Debug + Display + Eq + Hash + Ord + Send + Sync {}
impl<T: Clone + Debug + Display + Eq + Hash + Ord + Send + Sync> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
///
/// Arguments are built by [`ArgumentSet`] objects.
///
/// An argument may be *undeclared*: it was only referenced by an attack and never declared on its own.
/// Undeclared arguments take part in attacks, but they are not members of the framework arguments.
///
/// [`LabelType`]: trait.LabelType.html
/// [`ArgumentSet`]: struct.ArgumentSet.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
    declared: bool,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use exaf::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns `true` iff this argument was declared, and not only referenced by an attack.
    pub fn is_declared(&self) -> bool {
        self.declared
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// Ids are dense: they range from 0 to the number of known labels (declared or not) excluded.
#[derive(Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
    n_undeclared: usize,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Arguments
    ///
    /// * `labels` - the argument labels
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
            n_undeclared: 0,
        };
        labels.iter().for_each(|l| {
            argument_set.new_argument(l.clone());
        });
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }

    /// Declares a new argument in this set and returns its id.
    ///
    /// The id of a new argument is the previous maximal id plus one.
    /// If an argument with the same label is already declared, nothing changes.
    /// If the label was only referenced so far, the corresponding argument becomes declared and keeps its id.
    pub fn new_argument(&mut self, label: T) -> usize {
        let id = self.reference_argument(label);
        let arg = &mut self.arguments[id];
        if !arg.declared {
            arg.declared = true;
            self.n_undeclared -= 1;
        }
        id
    }

    /// Registers a label referenced by an attack and returns its id.
    ///
    /// If the label is unknown, an undeclared argument is created for it.
    /// Otherwise, the id of the existing argument is returned.
    pub fn reference_argument(&mut self, label: T) -> usize {
        if let Some(id) = self.label_to_id.get(&label) {
            return *id;
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.arguments.push(Argument {
            id,
            label,
            declared: false,
        });
        self.n_undeclared += 1;
        id
    }

    /// Returns the number of declared arguments in the set.
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let mut arguments = ArgumentSet::new_with_labels(&labels);
    /// arguments.reference_argument("d");
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn len(&self) -> usize {
        self.arguments.len() - self.n_undeclared
    }

    /// Returns `true` iff the set has no declared argument.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of arguments that are referenced by attacks but not declared.
    pub fn n_undeclared(&self) -> usize {
        self.n_undeclared
    }

    /// Returns the number of ids given so far, including the ones of undeclared arguments.
    pub fn n_ids(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, an error is returned.
    /// Undeclared arguments have an index.
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(0, arguments.get_argument_index(&labels[0]).unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&labels[2]).unwrap());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .ok_or_else(|| anyhow!("no such argument: {}", label))
            .copied()
    }

    /// Returns the argument associated to an argument label, be it declared or not.
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert!(arguments.get_argument(&"a").is_ok());
    /// assert!(arguments.get_argument(&"d").is_err());
    /// ```
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.label_to_id
            .get(label)
            .map(|i| &self.arguments[*i])
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the declared argument associated to an argument label.
    ///
    /// An error is returned if the label is unknown or if it is only referenced by attacks.
    pub fn get_declared_argument(&self, label: &T) -> Result<&Argument<T>> {
        let arg = self.get_argument(label)?;
        if arg.declared {
            Ok(arg)
        } else {
            Err(anyhow!("argument {} is not declared", label))
        }
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns an iterator to the declared arguments, in id order.
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.iter().count());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter().filter(|a| a.declared)
    }

    /// Returns an iterator to the arguments that are referenced by attacks but not declared.
    pub fn iter_undeclared(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter().filter(|a| !a.declared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(3, args.arguments.len());
        assert_eq!(3, args.label_to_id.len());
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        for (i, a) in args.arguments.iter().enumerate() {
            assert_eq!(i, a.id);
            assert_eq!(arg_labels[i], a.label);
            assert!(a.declared);
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]);
        assert_eq!(0, args.len());
        assert!(args.is_empty());
    }

    #[test]
    fn test_new_repeated_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(2, args.arguments.len());
    }

    #[test]
    fn test_iter_keeps_order() {
        let arg_labels = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let iter_labels = args
            .iter()
            .map(|a| a.label().clone())
            .collect::<Vec<String>>();
        assert_eq!(arg_labels, iter_labels);
    }

    #[test]
    fn test_add_arguments() {
        let arg_labels = vec!["a".to_string(), "b".to_string()];
        let mut args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(2, args.new_argument("c".to_string()));
        assert_eq!(2, args.new_argument("c".to_string()));
        assert_eq!(3, args.arguments.len());
        assert_eq!(2, args.get_argument(&"c".to_string()).unwrap().id())
    }

    #[test]
    fn test_reference_argument() {
        let mut args = ArgumentSet::new_with_labels(&["a"]);
        assert_eq!(0, args.reference_argument("a"));
        assert_eq!(1, args.reference_argument("b"));
        assert_eq!(1, args.len());
        assert_eq!(2, args.n_ids());
        assert_eq!(1, args.n_undeclared());
        assert!(!args.get_argument(&"b").unwrap().is_declared());
        assert!(args.get_declared_argument(&"b").is_err());
        assert_eq!(vec!["b"], args.iter_undeclared().map(|a| *a.label()).collect::<Vec<_>>());
        assert_eq!(vec!["a"], args.iter().map(|a| *a.label()).collect::<Vec<_>>());
    }

    #[test]
    fn test_declare_referenced_argument() {
        let mut args = ArgumentSet::new_with_labels(&["a"]);
        args.reference_argument("b");
        assert_eq!(1, args.new_argument("b"));
        assert_eq!(2, args.len());
        assert_eq!(0, args.n_undeclared());
        assert!(args.get_declared_argument(&"b").is_ok());
    }

    #[test]
    #[should_panic(expected = "no such argument: c")]
    fn test_get_unknown_argument() {
        let args = ArgumentSet::new_with_labels(&["a".to_string(), "b".to_string()]);
        args.get_argument(&"c".to_string()).unwrap();
    }
}
