use crate::formula::{Formula, Literal, Variable};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;

/// A (partial or total) truth assignment, ordered by variable.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Model {
    values: BTreeMap<Variable, bool>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, variable: Variable) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    /// Records `value` for `variable`, returning the value it replaced.
    pub fn assign(&mut self, variable: Variable, value: bool) -> Option<bool> {
        self.values.insert(variable, value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values.iter().map(|(v, b)| (*v, *b))
    }

    /// Evaluates `literal`, reading undecided variables as false.
    pub fn holds(&self, literal: &Literal) -> bool {
        literal.holds_under(self.value(*literal.variable()).unwrap_or(false))
    }

    /// Whether every clause of `formula` holds, reading undecided variables as false.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula.clauses().all(|clause| clause.literals().any(|l| self.holds(l)))
    }

    /// Folds `child` into this model; the child's values win on collisions.
    pub fn merge(&mut self, child: Model) {
        self.values.extend(child.values);
    }
}

impl FromIterator<(Variable, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Mapping notation used in result tables, e.g. `{1: True, 2: False}`.
impl Display for Model {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("{")?;
        let mut first = true;
        for (variable, value) in self.iter() {
            if first {
                first = false;
            } else {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", variable, if value { "True" } else { "False" })?;
        }
        f.write_str("}")
    }
}
