use super::{Argument, ArgumentSet, ArgumentSubset, LabelType};
use anyhow::{anyhow, Result};

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// The framework is built by adding arguments and attacks; once built, solvers only borrow it immutably.
///
/// Attacks may involve labels that were never declared as arguments.
/// In this case, an undeclared argument is created (see [`Argument::is_declared`]).
/// Undeclared arguments take part in the attack relation, but they are not members of the set of arguments
/// the semantics are computed on.
#[derive(Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use exaf::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

const NO_IDS: &[usize] = &[];

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Arguments
    ///
    /// * `arguments` - the set of arguments
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.argument_set().len());
    /// assert_eq!(0, framework.iter_attacks().count());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attacks_from = (0..arguments.n_ids()).map(|_| vec![]).collect();
        let attacks_to = (0..arguments.n_ids()).map(|_| vec![]).collect();
        AAFramework {
            arguments,
            attacks: vec![],
            attacks_from,
            attacks_to,
        }
    }

    fn sync_attack_lists(&mut self) {
        while self.attacks_from.len() < self.arguments.n_ids() {
            self.attacks_from.push(Vec::new());
            self.attacks_to.push(Vec::new());
        }
    }

    /// Declares a new argument in this argumentation framework.
    ///
    /// If the label was already referenced by an attack, the corresponding argument becomes declared.
    pub fn new_argument(&mut self, label: T) {
        self.arguments.new_argument(label);
        self.sync_attack_lists();
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// Labels that do not match any argument are registered as undeclared arguments.
    /// The attack relation is a set: the function returns `false` (and does nothing) if the attack already exists.
    ///
    /// # Arguments
    ///
    /// * `from` - the label of the source arguments (attacker)
    /// * `to` - the label of the destination argument (attacked)
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert!(framework.new_attack(&labels[0], &labels[1]));
    /// assert!(!framework.new_attack(&labels[0], &labels[1]));
    /// assert_eq!(1, framework.iter_attacks().count());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> bool {
        let attacker_id = self.arguments.reference_argument(from.clone());
        let attacked_id = self.arguments.reference_argument(to.clone());
        self.sync_attack_lists();
        self.push_attack(attacker_id, attacked_id)
    }

    fn push_attack(&mut self, from: usize, to: usize) -> bool {
        if self.attacks_from[from].contains(&to) {
            return false;
        }
        self.attacks.push((from, to));
        self.attacks_from[from].push(to);
        self.attacks_to[to].push(from);
        true
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the ids of the arguments attacked by the argument with the given id.
    ///
    /// Unknown ids are attacked by nobody and attack nothing.
    pub fn attacked_ids_from(&self, id: usize) -> &[usize] {
        self.attacks_from.get(id).map_or(NO_IDS, Vec::as_slice)
    }

    /// Returns the ids of the arguments attacking the argument with the given id.
    pub fn attacker_ids_of(&self, id: usize) -> &[usize] {
        self.attacks_to.get(id).map_or(NO_IDS, Vec::as_slice)
    }

    /// Provides an iterator to the attacks, in insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(0, framework.iter_attacks().count());
    /// framework.new_attack(&"a", &"b");
    /// assert_eq!(1, framework.iter_attacks().count());
    /// ```
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| self.attack(*a, *b))
    }

    fn attack(&self, from: usize, to: usize) -> Attack<'_, T> {
        Attack(
            self.arguments.get_argument_by_id(from),
            self.arguments.get_argument_by_id(to),
        )
    }

    /// Returns the number of (declared) arguments in this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use exaf::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&"a", &"d");
    /// assert_eq!(3, framework.n_arguments());
    /// ```
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }

    /// Checks that every attack involves declared arguments only.
    ///
    /// The semantics are well-defined even if this is not the case;
    /// this check is provided to callers requiring a strict input validation.
    pub fn check_attacks_declared(&self) -> Result<()> {
        let mut undeclared = self
            .arguments
            .iter_undeclared()
            .map(|a| a.label())
            .collect::<Vec<&T>>();
        if undeclared.is_empty() {
            return Ok(());
        }
        undeclared.sort_unstable();
        let labels = undeclared
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        Err(anyhow!(
            "attacks involve {} undeclared argument(s): {}",
            undeclared.len(),
            labels
        ))
    }

    /// Builds the subset of arguments matching the provided labels.
    ///
    /// Labels that are unknown to this framework take part in no attack,
    /// so they are ignored.
    pub fn subset_of_labels(&self, labels: &[T]) -> ArgumentSubset {
        let ids = labels
            .iter()
            .filter_map(|l| self.arguments.get_argument_index(l).ok());
        ArgumentSubset::from_ids(self.arguments.n_ids(), ids)
    }

    /// Returns the arguments of a subset, sorted by their labels.
    pub fn subset_arguments(&self, subset: &ArgumentSubset) -> Vec<&Argument<T>> {
        let mut args = subset
            .iter()
            .filter(|id| *id < self.arguments.n_ids())
            .map(|id| self.arguments.get_argument_by_id(id))
            .collect::<Vec<&Argument<T>>>();
        args.sort_unstable_by(|a, b| a.label().cmp(b.label()));
        args
    }
}
