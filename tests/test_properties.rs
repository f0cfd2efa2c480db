use exaf::aa::{properties, AAFramework, AcceptanceMode, ArgumentSet, ArgumentSubset, Semantics};
use exaf::solvers::{
    enumeration, AcceptanceQueryEvaluator, CompleteSemanticsSolver, EnumerationOptions,
    EnumerationStrategy, StableSemanticsSolver,
};
use proptest::prelude::*;

const MAX_ARGS: usize = 6;
const MAX_UNDECLARED: usize = 2;

fn framework(n_args: usize, attack_matrix: &[bool]) -> AAFramework<String> {
    let labels = (0..n_args).map(|i| format!("a{}", i)).collect::<Vec<String>>();
    let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
    for (i, from) in labels.iter().enumerate() {
        for (j, to) in labels.iter().enumerate() {
            if attack_matrix[i * n_args + j] {
                af.new_attack(from, to);
            }
        }
    }
    af
}

fn framework_with_undeclared(
    n_args: usize,
    n_undeclared: usize,
    attack_matrix: &[bool],
) -> AAFramework<String> {
    let declared = (0..n_args).map(|i| format!("a{}", i)).collect::<Vec<String>>();
    let labels = declared
        .iter()
        .cloned()
        .chain((0..n_undeclared).map(|i| format!("u{}", i)))
        .collect::<Vec<String>>();
    let n_labels = labels.len();
    let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&declared));
    for (i, from) in labels.iter().enumerate() {
        for (j, to) in labels.iter().enumerate() {
            if attack_matrix[i * n_labels + j] {
                af.new_attack(from, to);
            }
        }
    }
    af
}

fn arb_attack_matrix_with_undeclared() -> impl Strategy<Value = (usize, usize, Vec<bool>)> {
    (0usize..=MAX_ARGS, 0usize..=MAX_UNDECLARED).prop_flat_map(|(n, k)| {
        (
            Just(n),
            Just(k),
            proptest::collection::vec(any::<bool>(), (n + k) * (n + k)),
        )
    })
}

fn arb_attack_matrix() -> impl Strategy<Value = (usize, Vec<bool>)> {
    (0usize..=MAX_ARGS)
        .prop_flat_map(|n| (Just(n), proptest::collection::vec(any::<bool>(), n * n)))
}

fn options(strategy: EnumerationStrategy, n_threads: usize) -> EnumerationOptions {
    EnumerationOptions {
        strategy,
        n_threads,
    }
}

fn all_subsets_with<P>(af: &AAFramework<String>, predicate: P) -> Vec<ArgumentSubset>
where
    P: Fn(&ArgumentSubset) -> bool + Send + Sync,
{
    enumeration::enumerate(af, &options(EnumerationStrategy::PowerSet, 1), predicate)
}

proptest! {
    #[test]
    fn empty_set_is_admissible((n, matrix) in arb_attack_matrix()) {
        let af = framework(n, &matrix);
        prop_assert!(properties::is_admissible(&af, &ArgumentSubset::new(af.argument_set().n_ids())));
    }

    #[test]
    fn stable_extensions_are_complete((n, matrix) in arb_attack_matrix()) {
        let af = framework(n, &matrix);
        let complete = CompleteSemanticsSolver::new(&af).complete_extensions().clone();
        let mut stable_solver = StableSemanticsSolver::new(&af);
        for ext in stable_solver.stable_extensions().iter() {
            prop_assert!(complete.iter().any(|c| c == ext));
        }
    }

    #[test]
    fn complete_extensions_are_fixpoints((n, matrix) in arb_attack_matrix()) {
        let af = framework(n, &matrix);
        let mut solver = CompleteSemanticsSolver::new(&af);
        for ext in solver.complete_extensions().iter() {
            let image = properties::characteristic_function(&af, ext);
            prop_assert_eq!(ext, &image);
        }
    }

    #[test]
    fn admissible_sets_grow_under_characteristic_function((n, matrix) in arb_attack_matrix()) {
        let af = framework(n, &matrix);
        let admissible = all_subsets_with(&af, |s| properties::is_admissible(&af, s));
        for set in admissible.iter() {
            let image = properties::characteristic_function(&af, set);
            prop_assert!(set.is_subset(&image));
            if !properties::is_complete(&af, set) {
                prop_assert!(image.len() > set.len());
            }
        }
    }

    #[test]
    fn stable_extensions_attack_all_outsiders((n, matrix) in arb_attack_matrix()) {
        let af = framework(n, &matrix);
        let mut solver = StableSemanticsSolver::new(&af);
        for ext in solver.stable_extensions().iter() {
            let attacked = properties::attacked_by(&af, ext);
            for arg in af.argument_set().iter() {
                prop_assert_eq!(!ext.contains(arg.id()), attacked.contains(arg.id()));
            }
        }
    }

    #[test]
    fn skeptical_acceptance_implies_credulous_acceptance((n, matrix) in arb_attack_matrix()) {
        let af = framework(n, &matrix);
        let mut evaluator = AcceptanceQueryEvaluator::new(&af);
        let labels = af.argument_set().iter().map(|a| a.label().clone()).collect::<Vec<String>>();
        for semantics in [Semantics::CO, Semantics::ST] {
            let single_extension = evaluator.extensions(semantics).len() == 1;
            for label in labels.iter() {
                let skeptical = evaluator.accepts(label, semantics, AcceptanceMode::Skeptical);
                let credulous = evaluator.accepts(label, semantics, AcceptanceMode::Credulous);
                if skeptical {
                    prop_assert!(credulous);
                }
                if single_extension {
                    prop_assert_eq!(skeptical, credulous);
                }
            }
        }
    }

    #[test]
    fn undeclared_attackers_keep_complete_extensions_fixpoints(
        (n, k, matrix) in arb_attack_matrix_with_undeclared()
    ) {
        let af = framework_with_undeclared(n, k, &matrix);
        let mut solver = CompleteSemanticsSolver::new(&af);
        for ext in solver.complete_extensions().iter() {
            for id in ext.iter() {
                prop_assert!(af.argument_set().get_argument_by_id(id).is_declared());
            }
            let image = properties::characteristic_function(&af, ext);
            prop_assert_eq!(ext, &image);
        }
    }

    #[test]
    fn undeclared_attackers_keep_stable_coverage_over_declared_arguments(
        (n, k, matrix) in arb_attack_matrix_with_undeclared()
    ) {
        let af = framework_with_undeclared(n, k, &matrix);
        let mut solver = StableSemanticsSolver::new(&af);
        for ext in solver.stable_extensions().iter() {
            prop_assert!(properties::is_conflict_free(&af, ext));
            let attacked = properties::attacked_by(&af, ext);
            for arg in af.argument_set().iter() {
                prop_assert_eq!(!ext.contains(arg.id()), attacked.contains(arg.id()));
            }
            for arg in af.argument_set().iter_undeclared() {
                prop_assert!(!ext.contains(arg.id()));
            }
        }
    }

    #[test]
    fn undeclared_attackers_keep_enumeration_deterministic(
        (n, k, matrix) in arb_attack_matrix_with_undeclared()
    ) {
        let af = framework_with_undeclared(n, k, &matrix);
        let reference = CompleteSemanticsSolver::new(&af).complete_extensions().clone();
        let reference_stable = StableSemanticsSolver::new(&af).stable_extensions().clone();
        let opts = options(EnumerationStrategy::PowerSet, 2);
        let mut complete_solver = CompleteSemanticsSolver::new_with_options(&af, opts);
        prop_assert_eq!(&reference, complete_solver.complete_extensions());
        let mut stable_solver = StableSemanticsSolver::new_with_options(&af, opts);
        prop_assert_eq!(&reference_stable, stable_solver.stable_extensions());
    }

    #[test]
    fn enumeration_is_deterministic((n, matrix) in arb_attack_matrix()) {
        let af = framework(n, &matrix);
        let reference = CompleteSemanticsSolver::new(&af).complete_extensions().clone();
        let reference_stable = StableSemanticsSolver::new(&af).stable_extensions().clone();
        for strategy in [EnumerationStrategy::PowerSet, EnumerationStrategy::ConflictFree] {
            for n_threads in [1, 3] {
                let opts = options(strategy, n_threads);
                let mut complete_solver = CompleteSemanticsSolver::new_with_options(&af, opts);
                prop_assert_eq!(&reference, complete_solver.complete_extensions());
                let mut stable_solver = StableSemanticsSolver::new_with_options(&af, opts);
                prop_assert_eq!(&reference_stable, stable_solver.stable_extensions());
            }
        }
    }
}
