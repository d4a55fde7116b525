//! Multi-instance CNF files: a DIMACS-like format where each instance is
//! introduced by a `c <id> <k> <status>` line followed by a `p cnf` line.
//!
//! ```text
//! c 1 3 ?
//! p cnf 4 5
//! 1,2
//! -1,3
//! ```

use crate::formula::{Clause, Formula, Literal};
use log::warn;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{BufRead, BufReader, Read};

#[derive(Clone, Debug)]
pub struct Instance {
    pub id: String,
    /// The optional numeric parameter of the header line.
    pub k: Option<usize>,
    /// Expected outcome code, e.g. `S`, `U` or `?`.
    pub status: String,
    pub formula: Formula,
}

struct Header {
    id: String,
    k: Option<usize>,
    status: String,
}

struct Pending {
    header: Header,
    num_variables: usize,
    num_clauses: usize,
    clauses: Vec<Clause>,
}

impl Pending {
    fn finish(self) -> Instance {
        if self.clauses.len() != self.num_clauses {
            warn!(
                "instance {}: header declares {} clauses, found {}",
                self.header.id,
                self.num_clauses,
                self.clauses.len()
            );
        }
        Instance {
            id: self.header.id,
            k: self.header.k,
            status: self.header.status,
            formula: Formula::new(self.num_variables, self.clauses),
        }
    }
}

pub fn parse<R: Read>(reader: R) -> Result<Vec<Instance>, InstanceParseError> {
    let reader = BufReader::new(reader);

    let mut instances = vec![];
    let mut header = None;
    let mut current: Option<Pending> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line?;
        let mut tokens = line.split_whitespace().peekable();

        match tokens.peek() {
            None => continue,
            Some(&"%") => continue,
            Some(&"c") => {
                let _ = tokens.next();
                // the last comment line before a problem line names the instance
                if let Some(id) = tokens.next() {
                    header = Some(Header {
                        id: id.to_string(),
                        k: tokens.next().and_then(|k| k.parse().ok()),
                        status: tokens.next().unwrap_or("?").to_string(),
                    });
                }
            }
            Some(&"p") => {
                let _ = tokens.next();

                if tokens.next() != Some("cnf") {
                    return Err(InstanceParseError::format(line_no, "missing 'cnf'"));
                }

                let num_variables = tokens
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| InstanceParseError::format(line_no, "invalid num_variables"))?;
                let num_clauses = tokens
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| InstanceParseError::format(line_no, "invalid num_clauses"))?;

                if let Some(pending) = current.take() {
                    instances.push(pending.finish());
                }
                let header = header.take().unwrap_or_else(|| Header {
                    id: (instances.len() + 1).to_string(),
                    k: None,
                    status: "?".to_string(),
                });
                current = Some(Pending {
                    header,
                    num_variables,
                    num_clauses,
                    clauses: vec![],
                });
            }
            Some(_) => {
                let pending = current
                    .as_mut()
                    .ok_or_else(|| InstanceParseError::format(line_no, "missing 'p' line before clauses"))?;
                // a bare terminator (e.g. the `0` after a SATLIB `%` trailer) is not a clause
                if let Some(clause) = parse_clause(&line, line_no)? {
                    pending.clauses.push(clause);
                }
            }
        }
    }

    if let Some(pending) = current.take() {
        instances.push(pending.finish());
    }
    Ok(instances)
}

/// Literals may be separated by commas and/or whitespace. A `0` may only
/// appear as the last token, where it ends the clause; a line holding nothing
/// but that terminator yields `None`.
fn parse_clause(line: &str, line_no: usize) -> Result<Option<Clause>, InstanceParseError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    let mut clause = vec![];
    for (i, token) in tokens.iter().enumerate() {
        let l = token
            .parse::<isize>()
            .map_err(|_| InstanceParseError::format(line_no, format!("invalid literal '{}'", token)))?;
        match Literal::from_signed(l) {
            Some(literal) => clause.push(literal),
            None if i + 1 == tokens.len() => break,
            None => return Err(InstanceParseError::format(line_no, "literal 0 inside clause")),
        }
    }

    if clause.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Clause::new(clause)))
    }
}

#[derive(Debug)]
pub enum InstanceParseError {
    Io(std::io::Error),
    Format { line: usize, message: String },
}

impl InstanceParseError {
    fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}

impl Display for InstanceParseError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Format { line, message } => write!(f, "line {}: {}", line, message),
        }
    }
}

impl Error for InstanceParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format { .. } => None,
        }
    }
}

impl From<std::io::Error> for InstanceParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
