pub mod instances;

use std::fmt::Debug;
use std::fmt::{self, Display, Formatter};

/// A propositional variable. Variables are numbered from 1.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    /// Builds a literal from signed integer notation (`3` is `x3`, `-3` is `!x3`).
    /// Returns `None` for `0`, which is not a literal.
    pub fn from_signed(l: isize) -> Option<Self> {
        if l > 0 {
            Some(Literal::Positive(Variable(l as usize)))
        } else if l < 0 {
            Some(Literal::Negative(Variable(l.unsigned_abs())))
        } else {
            None
        }
    }

    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }

    /// Whether this literal holds when its variable takes `value`.
    pub fn holds_under(&self, value: bool) -> bool {
        value == self.is_positive()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "-{}", x),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The single literal of a unit clause.
    pub fn unit(&self) -> Option<&Literal> {
        match self.literals.as_slice() {
            [literal] => Some(literal),
            _ => None,
        }
    }
}

/// Unit clauses print bare (`!3`), others parenthesised (`(1 | !3)`, `()`).
impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if let Some(literal) = self.unit() {
            return write_literal(f, literal);
        }
        f.write_str("(")?;
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write_literal(f, literal)?;
        }
        f.write_str(")")
    }
}

fn write_literal(f: &mut Formatter, literal: &Literal) -> Result<(), fmt::Error> {
    if literal.is_positive() {
        write!(f, "{}", literal.variable())
    } else {
        write!(f, "!{}", literal.variable())
    }
}

/// A CNF formula: a conjunction of clauses over variables `1..=num_variables`.
///
/// Clauses may mention variables above `num_variables`; every solver tolerates
/// this without panicking.
#[derive(Clone, PartialEq, Eq)]
pub struct Formula {
    num_variables: usize,
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(num_variables: usize, conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            num_variables,
            clauses: conjuncts.into_iter().collect(),
        }
    }

    /// Builds a formula from clauses in signed integer notation. Returns `None`
    /// if any literal is `0`.
    pub fn from_signed(
        num_variables: usize,
        conjuncts: impl IntoIterator<Item = impl IntoIterator<Item = isize>>,
    ) -> Option<Self> {
        let clauses = conjuncts
            .into_iter()
            .map(|clause| {
                clause
                    .into_iter()
                    .map(Literal::from_signed)
                    .collect::<Option<Vec<_>>>()
                    .map(Clause::new)
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(num_variables, clauses))
    }

    /// The declared number of variables.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }
}

impl Debug for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "[{} vars] ", self.num_variables)?;
        Display::fmt(self, f)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

/// Random formulas with up to `max_vars` variables and clauses of width 1 to 3.
#[cfg(test)]
pub(crate) fn formula_strategy(
    max_vars: usize,
    max_clauses: usize,
) -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    (1..=max_vars).prop_flat_map(move |num_vars| {
        let literal = (1..=num_vars, any::<bool>()).prop_map(|(v, positive)| if positive { p(v) } else { n(v) });
        let clause = proptest::collection::vec(literal, 1..=3).prop_map(Clause::new);
        proptest::collection::vec(clause, 0..=max_clauses).prop_map(move |clauses| Formula::new(num_vars, clauses))
    })
}
