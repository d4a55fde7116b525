//! CSV results table.

use crate::batch::Record;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const HEADER: &str = "instance_id,n_vars,n_clauses,method,satisfiable,time_seconds,solution";

/// Quotes a field if it contains a comma, quote or line break.
fn escape(field: &str) -> Cow<str> {
    if field.contains(|c: char| c == ',' || c == '"' || c == '\n' || c == '\r') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// One row: id, variable count, clause count, status code, seconds, label, model.
pub fn row(record: &Record) -> String {
    let solution = record
        .result
        .model()
        .map(|model| model.to_string())
        .unwrap_or_else(|| "{}".to_string());
    format!(
        "{},{},{},{},{},{},{}",
        escape(&record.instance_id),
        record.num_variables,
        record.num_clauses,
        escape(&record.status),
        record.elapsed.as_secs_f64(),
        escape(&record.label),
        escape(&solution)
    )
}

pub fn write_csv<W: Write>(writer: W, records: &[Record]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{}", HEADER)?;
    for record in records {
        writeln!(writer, "{}", row(record))?;
    }
    writer.flush()
}

pub fn write_to_path(path: impl AsRef<Path>, records: &[Record]) -> io::Result<()> {
    let file = File::create(path)?;
    write_csv(file, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Model, SatResult, Variable};
    use std::time::Duration;

    fn record(id: &str, status: &str, result: SatResult) -> Record {
        Record {
            instance_id: id.to_string(),
            num_variables: 4,
            num_clauses: 10,
            status: status.to_string(),
            elapsed: Duration::from_millis(250),
            label: "BruteForce".to_string(),
            result,
        }
    }

    fn satisfied() -> SatResult {
        let model: Model = vec![(Variable(1), true), (Variable(2), false), (Variable(3), false), (Variable(4), false)]
            .into_iter()
            .collect();
        SatResult::Satisfiable(model)
    }

    #[test]
    fn rows() {
        assert_eq!(row(&record("3", "U", SatResult::Unsatisfiable)), "3,4,10,U,0.25,BruteForce,{}");
        assert_eq!(
            row(&record("4", "S", satisfied())),
            "4,4,10,S,0.25,BruteForce,\"{1: True, 2: False, 3: False, 4: False}\""
        );
    }

    #[test]
    fn escaping() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn writes_file() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("resultsfile.csv");
        write_to_path(&path, &[record("3", "U", SatResult::Unsatisfiable), record("4", "S", satisfied())])?;

        let contents = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("3,4,10,U,"));
        assert!(lines[2].ends_with(",BruteForce,\"{1: True, 2: False, 3: False, 4: False}\""));
        Ok(())
    }
}
