//! Greedy-best enumeration: walks the same candidate order as
//! [`brute_force`](crate::brute_force) while remembering the candidate that
//! satisfied the most clauses.

use crate::brute_force::Candidate;
use crate::formula::Formula;
use crate::{Model, SatResult};
use log::{debug, trace};

/// The best candidate seen by [`search`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BestAssignment {
    pub satisfied: usize,
    pub model: Model,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Outcome {
    /// The public result. On exhaustion this is `Unsatisfiable`, never the best partial model.
    pub result: SatResult,
    /// The best candidate seen, if any candidate was evaluated.
    pub best: Option<BestAssignment>,
}

pub fn solve(f: &Formula) -> SatResult {
    search(f).result
}

/// Like [`solve`], but also reports the best candidate found.
pub fn search(f: &Formula) -> Outcome {
    if f.num_clauses() == 0 {
        return Outcome {
            result: SatResult::Satisfiable(Model::new()),
            best: None,
        };
    }

    let total = f.num_clauses();
    let mut candidate = Candidate::new(f.num_variables());
    let mut best: Option<BestAssignment> = None;

    loop {
        let satisfied = f.clauses().filter(|clause| candidate.satisfies(clause)).count();

        // ties keep the earlier candidate
        if best.as_ref().map_or(true, |b| satisfied > b.satisfied) {
            trace!("best case: new best {}/{} clauses", satisfied, total);
            let model = candidate.to_model();
            if satisfied == total {
                debug!("best case: all {} clauses satisfied", total);
                return Outcome {
                    result: SatResult::Satisfiable(model.clone()),
                    best: Some(BestAssignment { satisfied, model }),
                };
            }
            best = Some(BestAssignment { satisfied, model });
        }

        if !candidate.advance() {
            break;
        }
    }

    debug!(
        "best case: exhausted, best candidate satisfied {}/{} clauses",
        best.as_ref().map_or(0, |b| b.satisfied),
        total
    );
    Outcome {
        result: SatResult::Unsatisfiable,
        best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute_force;
    use crate::formula::formula_strategy;
    use crate::formula::Variable;
    use proptest::prelude::*;

    #[test]
    fn empty_clause_set_short_circuits() {
        let outcome = search(&Formula::new(3, vec![]));
        assert_eq!(outcome.result, SatResult::Satisfiable(Model::new()));
        assert_eq!(outcome.best, None);
    }

    #[test]
    fn unsat_hides_best_candidate() {
        let f = Formula::from_signed(1, vec![vec![1], vec![-1]]).unwrap();
        assert_eq!(solve(&f).into_parts(), (false, Model::new()));

        let outcome = search(&f);
        assert_eq!(outcome.result, SatResult::Unsatisfiable);
        // both candidates satisfy one clause; the first one seen is kept
        let best = outcome.best.unwrap();
        assert_eq!(best.satisfied, 1);
        assert_eq!(best.model, vec![(Variable(1), false)].into_iter().collect::<Model>());
    }

    #[test]
    fn best_count_is_exact() {
        // no candidate satisfies all four, x1 = x2 = true satisfies three
        let f = Formula::from_signed(2, vec![vec![1], vec![2], vec![-1, -2], vec![1, 2]]).unwrap();
        let outcome = search(&f);
        assert_eq!(outcome.result, SatResult::Unsatisfiable);
        let best = outcome.best.unwrap();
        assert_eq!(best.satisfied, 3);
        assert_eq!(best.model.to_string(), "{1: True, 2: False}");
    }

    #[test]
    fn odd_cycle_example() {
        let f = Formula::from_signed(4, vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![2, 4], vec![3, 4]]).unwrap();
        let (sat, m) = solve(&f).into_parts();
        assert!(sat);
        assert!(m.satisfies(&f));
    }

    proptest! {
        #[test]
        fn proptest_matches_brute_force(f in formula_strategy(8, 12)) {
            prop_assume!(f.num_clauses() > 0);
            prop_assert_eq!(solve(&f), brute_force::solve(&f));
        }
    }
}
