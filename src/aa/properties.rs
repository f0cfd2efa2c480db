//! Properties of sets of arguments in Dung semantics.
//!
//! All the functions of this module are total: they accept any subset,
//! including subsets with undeclared arguments or with ids unknown to the framework
//! (such ids take part in no attack).

use super::{AAFramework, ArgumentSubset, LabelType};

/// Returns `true` iff no member of the set attacks a member of the set (itself included).
///
/// # Example
///
/// ```
/// # use exaf::aa::{AAFramework, ArgumentSet, properties};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b");
/// assert!(properties::is_conflict_free(&af, &af.subset_of_labels(&["a"])));
/// assert!(!properties::is_conflict_free(&af, &af.subset_of_labels(&["a", "b"])));
/// ```
pub fn is_conflict_free<T>(af: &AAFramework<T>, set: &ArgumentSubset) -> bool
where
    T: LabelType,
{
    set.iter()
        .all(|a| af.attacked_ids_from(a).iter().all(|b| !set.contains(*b)))
}

/// Returns `true` iff the set counter-attacks each attacker of the target.
///
/// An argument that is not attacked is defended by any set.
pub fn defends<T>(af: &AAFramework<T>, set: &ArgumentSubset, target: usize) -> bool
where
    T: LabelType,
{
    af.attacker_ids_of(target).iter().all(|attacker| {
        af.attacker_ids_of(*attacker)
            .iter()
            .any(|defender| set.contains(*defender))
    })
}

/// Returns `true` iff the set is conflict-free and defends all its members.
pub fn is_admissible<T>(af: &AAFramework<T>, set: &ArgumentSubset) -> bool
where
    T: LabelType,
{
    is_conflict_free(af, set) && set.iter().all(|a| defends(af, set, a))
}

/// Computes the characteristic function of the framework for the given set,
/// that is the set of (declared) arguments it defends.
pub fn characteristic_function<T>(af: &AAFramework<T>, set: &ArgumentSubset) -> ArgumentSubset
where
    T: LabelType,
{
    ArgumentSubset::from_ids(
        af.argument_set().n_ids(),
        af.argument_set()
            .iter()
            .map(|a| a.id())
            .filter(|id| defends(af, set, *id)),
    )
}

/// Returns `true` iff the set is a complete extension:
/// it is admissible and it is a fixpoint of the characteristic function.
pub fn is_complete<T>(af: &AAFramework<T>, set: &ArgumentSubset) -> bool
where
    T: LabelType,
{
    is_admissible(af, set) && characteristic_function(af, set) == *set
}

/// Computes the set of arguments attacked by the members of the set.
///
/// Undeclared arguments may belong to the result.
pub fn attacked_by<T>(af: &AAFramework<T>, set: &ArgumentSubset) -> ArgumentSubset
where
    T: LabelType,
{
    ArgumentSubset::from_ids(
        af.argument_set().n_ids(),
        set.iter()
            .flat_map(|a| af.attacked_ids_from(a).iter().copied()),
    )
}

/// Returns `true` iff the set is a stable extension:
/// it is a conflict-free set of declared arguments attacking each declared argument outside of it.
pub fn is_stable<T>(af: &AAFramework<T>, set: &ArgumentSubset) -> bool
where
    T: LabelType,
{
    let all_declared = set.iter().all(|id| {
        id < af.argument_set().n_ids() && af.argument_set().get_argument_by_id(id).is_declared()
    });
    all_declared
        && is_conflict_free(af, set)
        && af
            .argument_set()
            .iter()
            .filter(|a| !set.contains(a.id()))
            .all(|a| {
                af.attacker_ids_of(a.id())
                    .iter()
                    .any(|attacker| set.contains(*attacker))
            })
}
