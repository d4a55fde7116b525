use crate::formula::Formula;
use crate::solver::Solver;
use crate::{best_case, brute_force, SatResult};
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Anything that decides a [`Formula`]. Implementations must be pure: the same
/// formula always yields the same result, and the formula is never modified.
pub trait SatSolver {
    fn solve(&self, formula: &Formula) -> SatResult;

    /// Name used in result tables.
    fn label(&self) -> &str;
}

/// The built-in strategies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Algorithm {
    BruteForce,
    BestCase,
    BackTracking,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::BruteForce, Algorithm::BestCase, Algorithm::BackTracking];

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "BruteForce",
            Algorithm::BestCase => "BestCase",
            Algorithm::BackTracking => "BackTracking",
        }
    }

    pub fn solve(&self, formula: &Formula) -> SatResult {
        match self {
            Algorithm::BruteForce => brute_force::solve(formula),
            Algorithm::BestCase => best_case::solve(formula),
            Algorithm::BackTracking => Solver::new(formula).solve(),
        }
    }
}

impl SatSolver for Algorithm {
    fn solve(&self, formula: &Formula) -> SatResult {
        Algorithm::solve(self, formula)
    }

    fn label(&self) -> &str {
        Algorithm::label(self)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.label())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnknownAlgorithm(pub String);

impl Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "unknown algorithm '{}' (expected bruteforce, bestcase or backtracking)",
            self.0
        )
    }
}

impl Error for UnknownAlgorithm {}

/// Accepts labels case-insensitively, ignoring `-` and `_`.
impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.label().to_ascii_lowercase() == name)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("bruteforce".parse::<Algorithm>(), Ok(Algorithm::BruteForce));
        assert_eq!("BestCase".parse::<Algorithm>(), Ok(Algorithm::BestCase));
        assert_eq!("back-tracking".parse::<Algorithm>(), Ok(Algorithm::BackTracking));
        assert_eq!("back_tracking".parse::<Algorithm>(), Ok(Algorithm::BackTracking));
        assert_eq!("simple".parse::<Algorithm>(), Err(UnknownAlgorithm("simple".into())));
    }

    #[test]
    fn labels_round_trip() {
        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(*algorithm));
        }
    }

    #[test]
    fn dispatch_agrees_on_odd_cycle() {
        let f = Formula::from_signed(4, vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![2, 4], vec![3, 4]]).unwrap();
        for algorithm in Algorithm::ALL.iter() {
            let solver: &dyn SatSolver = algorithm;
            let (sat, model) = solver.solve(&f).into_parts();
            assert!(sat, "{}", solver.label());
            assert!(model.satisfies(&f), "{}", solver.label());
            assert_eq!(model.len(), 4, "{}", solver.label());
        }
    }
}
