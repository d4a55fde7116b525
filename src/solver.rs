use crate::formula::{Clause, Formula, Literal, Variable};
use crate::{Model, SatResult};
use log::{debug, trace};

/// Unit propagation with chronological backtracking.
///
/// The search runs on an explicit stack of frames, so its depth is not bounded
/// by the call stack. Branches are explored with the decision variable forced
/// true first, then false.
pub struct Solver<'f> {
    formula: &'f Formula,
    stats: Stats,
}

/// Counters collected during a single [`Solver::solve`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Stats {
    pub decisions: usize,
    pub propagations: usize,
    pub conflicts: usize,
    /// Conflicts raised by a unit clause disagreeing with a value assigned in the same pass.
    pub contradictions: usize,
}

/// A pending branch: the clauses still open and every decision made by its ancestors.
#[derive(Debug)]
struct Frame {
    clauses: Vec<Clause>,
    assignment: Model,
}

impl Frame {
    /// A child frame with `literal` forced by an extra unit clause. The child
    /// carries its parent's assignment, so the assignment it reports on success
    /// already includes every ancestor decision.
    fn child(mut clauses: Vec<Clause>, assignment: Model, literal: Literal) -> Self {
        clauses.push(Clause::new(vec![literal]));
        Self { clauses, assignment }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClauseIdx(usize);

#[derive(PartialEq, Eq, Clone, Debug)]
enum BcpResult {
    /// A unit clause disagrees with a value assigned earlier in the same pass.
    Contradiction(ClauseIdx),
    /// A clause lost all of its literals.
    Conflict(ClauseIdx),
    NoConflict,
}

impl<'f> Solver<'f> {
    pub fn new(formula: &'f Formula) -> Self {
        Self {
            formula,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn solve(&mut self) -> SatResult {
        self.stats = Stats::default();
        let mut stack = vec![Frame {
            clauses: self.formula.clauses().cloned().collect(),
            assignment: Model::new(),
        }];

        while let Some(mut frame) = stack.pop() {
            match self.bcp(&mut frame) {
                BcpResult::Contradiction(idx) => {
                    trace!("unit clause {} contradicts an assignment at depth {}", idx.0, stack.len());
                    self.stats.contradictions += 1;
                    self.stats.conflicts += 1;
                    continue;
                }
                BcpResult::Conflict(idx) => {
                    trace!("conflict on clause {} at depth {}", idx.0, stack.len());
                    self.stats.conflicts += 1;
                    continue;
                }
                BcpResult::NoConflict => {}
            }

            if frame.clauses.is_empty() {
                debug!("backtracking: satisfiable, {:?}", self.stats);
                return SatResult::Satisfiable(self.complete(frame.assignment));
            }

            match self.decide(&frame.assignment) {
                None => {
                    // every declared variable is decided but clauses over undeclared ones remain
                    trace!("no variable left to branch on, {} clauses open", frame.clauses.len());
                    self.stats.conflicts += 1;
                }
                Some(variable) => {
                    self.stats.decisions += 1;
                    trace!("decision on {} with {} clauses open", variable, frame.clauses.len());
                    let Frame { clauses, assignment } = frame;
                    // the false branch sits below the true one, so it runs only once the true subtree fails
                    stack.push(Frame::child(clauses.clone(), assignment.clone(), Literal::Negative(variable)));
                    stack.push(Frame::child(clauses, assignment, Literal::Positive(variable)));
                }
            }
        }

        debug!("backtracking: unsatisfiable, {:?}", self.stats);
        SatResult::Unsatisfiable
    }

    /// Runs unit propagation to a fixpoint, rewriting `frame.clauses` so that
    /// satisfied clauses are dropped and falsified literals removed.
    fn bcp(&mut self, frame: &mut Frame) -> BcpResult {
        let mut did_work = true;
        while did_work {
            did_work = false;

            for (idx, clause) in frame.clauses.iter().enumerate() {
                let literal = match clause.unit() {
                    Some(literal) => literal,
                    None => continue,
                };
                match frame.assignment.value(*literal.variable()) {
                    None => {
                        trace!("implied {} by clause {}", literal, idx);
                        frame.assignment.assign(*literal.variable(), literal.is_positive());
                        self.stats.propagations += 1;
                        did_work = true;
                    }
                    // two unit clauses disagree on the same variable
                    Some(value) if !literal.holds_under(value) => return BcpResult::Contradiction(ClauseIdx(idx)),
                    Some(_) => {}
                }
            }

            let mut simplified = Vec::with_capacity(frame.clauses.len());
            'clauses: for (idx, clause) in frame.clauses.iter().enumerate() {
                let mut open = vec![];
                for literal in clause.literals() {
                    match frame.assignment.value(*literal.variable()) {
                        Some(value) if literal.holds_under(value) => continue 'clauses,
                        Some(_) => {}
                        None => open.push(*literal),
                    }
                }
                // every literal was false => this branch is dead
                if open.is_empty() {
                    return BcpResult::Conflict(ClauseIdx(idx));
                }
                simplified.push(Clause::new(open));
            }
            frame.clauses = simplified;
        }
        BcpResult::NoConflict
    }

    /// The lowest-numbered declared variable without a value.
    fn decide(&self, assignment: &Model) -> Option<Variable> {
        (1..=self.formula.num_variables())
            .map(Variable)
            .find(|v| assignment.value(*v).is_none())
    }

    /// Extends a satisfying assignment to every declared variable; variables
    /// no clause constrained are set false.
    fn complete(&self, assignment: Model) -> Model {
        let mut model: Model = (1..=self.formula.num_variables())
            .map(|i| (Variable(i), false))
            .collect();
        model.merge(assignment);
        model
    }
}
