pub mod algorithm;
pub mod batch;
pub mod best_case;
pub mod brute_force;
pub mod config;
pub mod formula;
mod model;
pub mod report;
pub mod solver;

#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Model),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            SatResult::Satisfiable(model) => Some(model),
            SatResult::Unsatisfiable => None,
        }
    }

    /// The `(satisfiable, assignment)` pair; the assignment is empty when unsatisfiable.
    pub fn into_parts(self) -> (bool, Model) {
        match self {
            SatResult::Satisfiable(model) => (true, model),
            SatResult::Unsatisfiable => (false, Model::new()),
        }
    }
}

pub use algorithm::{Algorithm, SatSolver};
pub use formula::instances::Instance;
pub use formula::{Clause, Formula, Literal, Variable};
pub use model::Model;
pub use solver::Solver;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_parts_shape() {
        assert_eq!(SatResult::Unsatisfiable.into_parts(), (false, Model::new()));

        let model: Model = vec![(Variable(1), true)].into_iter().collect();
        let result = SatResult::Satisfiable(model.clone());
        assert!(result.is_satisfiable());
        assert_eq!(result.model(), Some(&model));
        assert_eq!(result.into_parts(), (true, model));
    }

    // Scenarios shared by every strategy.
    #[test]
    fn every_algorithm_on_trivial_formulas() {
        let empty = Formula::new(0, vec![]);
        let contradiction = Formula::from_signed(2, vec![vec![1], vec![-1]]).unwrap();
        let empty_clause = Formula::from_signed(3, vec![vec![1, 2], vec![]]).unwrap();

        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.solve(&empty).into_parts(), (true, Model::new()), "{}", algorithm);
            assert_eq!(algorithm.solve(&contradiction).into_parts(), (false, Model::new()), "{}", algorithm);
            assert_eq!(algorithm.solve(&empty_clause), SatResult::Unsatisfiable, "{}", algorithm);
        }
    }
}
