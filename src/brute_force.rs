use crate::formula::{Clause, Formula, Literal, Variable};
use crate::{Model, SatResult};
use log::debug;

/// A total assignment stepped through in counting order: variable `i` is bit
/// `i - 1` of a binary counter that starts at zero (every variable false).
///
/// The counter lives in a bit vector rather than a machine word, so it never
/// overflows regardless of the number of variables.
pub(crate) struct Candidate {
    bits: Vec<bool>,
}

impl Candidate {
    pub(crate) fn new(num_variables: usize) -> Self {
        Self {
            bits: vec![false; num_variables],
        }
    }

    /// Variables outside the declared range read as false.
    fn value(&self, variable: &Variable) -> bool {
        variable
            .0
            .checked_sub(1)
            .and_then(|bit| self.bits.get(bit))
            .copied()
            .unwrap_or(false)
    }

    fn holds(&self, literal: &Literal) -> bool {
        literal.holds_under(self.value(literal.variable()))
    }

    pub(crate) fn satisfies(&self, clause: &Clause) -> bool {
        clause.literals().any(|literal| self.holds(literal))
    }

    /// Moves to the next mask. Returns false once every mask has been visited.
    pub(crate) fn advance(&mut self) -> bool {
        for bit in self.bits.iter_mut() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return true;
            }
        }
        false
    }

    pub(crate) fn to_model(&self) -> Model {
        self.bits
            .iter()
            .enumerate()
            .map(|(bit, value)| (Variable(bit + 1), *value))
            .collect()
    }
}

/// Tries every total assignment in counting order and returns the first one
/// satisfying all clauses.
pub fn solve(f: &Formula) -> SatResult {
    let mut candidate = Candidate::new(f.num_variables());
    let mut visited: u64 = 0;

    'search: loop {
        visited = visited.saturating_add(1);
        'clauses: for clause in f.clauses() {
            for literal in clause.literals() {
                if candidate.holds(literal) {
                    // this clause is satisfied, let's go to the next one
                    continue 'clauses;
                }
            }
            // if we got here, this clause was not satisfied, so this assignment is bogus
            if candidate.advance() {
                continue 'search;
            } else {
                break 'search;
            }
        }
        // if we got here, every clause was satisfied, so we're done and satisfiable
        debug!("brute force: satisfied after {} candidates", visited);
        return SatResult::Satisfiable(candidate.to_model());
    }

    debug!("brute force: all {} candidates rejected", visited);
    SatResult::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    fn model(values: &[bool]) -> Model {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (Variable(i + 1), *v))
            .collect()
    }

    #[test]
    fn counting_order() {
        let mut c = Candidate::new(2);
        let mut seen = vec![c.to_model()];
        while c.advance() {
            seen.push(c.to_model());
        }
        assert_eq!(
            seen,
            vec![
                model(&[false, false]),
                model(&[true, false]),
                model(&[false, true]),
                model(&[true, true]),
            ]
        );
    }

    #[test]
    fn no_variables_has_a_single_candidate() {
        let mut c = Candidate::new(0);
        assert!(!c.advance());
        assert!(c.to_model().is_empty());
    }

    #[test]
    fn solve_bcp_sat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let f = Formula::new(2, vec![c1, c2]);

        assert_eq!(solve(&f), SatResult::Satisfiable(model(&[false, true])));
    }

    #[test]
    fn solve_bcp_unsat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let c3 = Clause::new(vec![n(2)]);
        let f = Formula::new(2, vec![c1, c2, c3]);

        assert_eq!(solve(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn first_mask_wins() {
        let f = Formula::from_signed(2, vec![vec![1, 2]]).unwrap();
        assert_eq!(solve(&f), SatResult::Satisfiable(model(&[true, false])));

        let f = Formula::from_signed(3, vec![vec![2], vec![3]]).unwrap();
        assert_eq!(solve(&f), SatResult::Satisfiable(model(&[false, true, true])));
    }

    #[test]
    fn three_clause_example() {
        let f = Formula::from_signed(3, vec![vec![1, 2], vec![-1, 3], vec![-2, -3]]).unwrap();
        let (sat, m) = solve(&f).into_parts();
        assert!(sat);
        assert!(m.satisfies(&f));
        assert_eq!(m, model(&[false, true, false]));
    }

    #[test]
    fn odd_cycle_example() {
        let f = Formula::from_signed(4, vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![2, 4], vec![3, 4]]).unwrap();
        let (sat, m) = solve(&f).into_parts();
        assert!(sat);
        assert_eq!(m.len(), 4);
        assert!(m.satisfies(&f));
    }

    #[test]
    fn empty_formula_without_variables() {
        assert_eq!(solve(&Formula::new(0, vec![])), SatResult::Satisfiable(Model::new()));
    }

    #[test]
    fn empty_clause_is_unsat() {
        let f = Formula::from_signed(2, vec![vec![1], vec![]]).unwrap();
        assert_eq!(solve(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn out_of_range_variables_read_false() {
        // variable 5 is undeclared, so it is false in every candidate
        let f = Formula::from_signed(1, vec![vec![5]]).unwrap();
        assert_eq!(solve(&f), SatResult::Unsatisfiable);

        let f = Formula::from_signed(1, vec![vec![-5], vec![1]]).unwrap();
        assert_eq!(solve(&f), SatResult::Satisfiable(model(&[true])));
    }
}
