use crate::{ClusteringError, Record};
use num_traits::Float;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

const COUNT_PREFIX: &str = "count=";

/// Reads records from a file in the `count=<N>` format. See [`parse_records`].
///
/// # Examples
/// ```no_run
///use agglomerative::load_records;
///
///let records = load_records::<f32, _>("objekty").unwrap();
/// ```
pub fn load_records<T, P>(path: P) -> Result<Vec<Record<T>>, ClusteringError>
where
    T: Float + FromStr,
    P: AsRef<Path>,
{
    let file = File::open(&path).map_err(|e| {
        ClusteringError::FileRead(format!("{}: {e}", path.as_ref().display()))
    })?;
    parse_records(BufReader::new(file))
}

/// Parses records from text of the form
/// ```text
/// count=<N>
/// <id> <x> <y>
/// ...
/// ```
/// At most `N` records are read. Reading stops early, without error, at the end of input or at
/// the first line that is not an integer id followed by two numbers. Blank lines are skipped.
///
/// # Returns
/// * The records in file order, a conversion error if the header is malformed, or a file read
///   error if the underlying reader fails.
///
/// # Examples
/// ```
///use agglomerative::parse_records;
///
///let input = "count=2\n1 0 0\n2 0.5 1\n";
///let records = parse_records::<f32, _>(input.as_bytes()).unwrap();
///assert_eq!(2, records.len());
///assert_eq!(0.5, records[1].x);
/// ```
pub fn parse_records<T, R>(reader: R) -> Result<Vec<Record<T>>, ClusteringError>
where
    T: Float + FromStr,
    R: BufRead,
{
    let mut lines = reader.lines();
    let declared = match next_non_blank(&mut lines)? {
        Some(header) => parse_header(&header)?,
        None => {
            return Err(ClusteringError::Conversion(String::from(
                "missing `count=` header",
            )))
        }
    };
    log::debug!("Header declares {declared} record(s)");

    let mut records = Vec::new();
    while records.len() < declared {
        let Some(line) = next_non_blank(&mut lines)? else {
            break;
        };
        match parse_record(&line) {
            Some(record) => records.push(record),
            None => {
                log::warn!("Stopped reading at malformed line {:?}", line.trim());
                break;
            }
        }
    }
    if records.len() < declared {
        log::warn!("Header declares {declared} record(s) but only {} were loaded", records.len());
    }
    Ok(records)
}

fn next_non_blank<I>(lines: &mut I) -> Result<Option<String>, ClusteringError>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    for line in lines {
        let line = line.map_err(|e| ClusteringError::FileRead(e.to_string()))?;
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

fn parse_header(line: &str) -> Result<usize, ClusteringError> {
    line.trim()
        .strip_prefix(COUNT_PREFIX)
        .and_then(|count| count.trim().parse::<usize>().ok())
        .ok_or_else(|| ClusteringError::Conversion(format!("malformed header {:?}", line.trim())))
}

fn parse_record<T: Float + FromStr>(line: &str) -> Option<Record<T>> {
    let mut fields = line.split_whitespace();
    let id = fields.next()?.parse::<i32>().ok()?;
    let x = fields.next()?.parse::<T>().ok()?;
    let y = fields.next()?.parse::<T>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Record::new(id, x, y))
}

/// Parses the requested final cluster count from a command line argument.
///
/// # Returns
/// * The count, a conversion error if `arg` is not an integer, or an invalid target error if it
///   is lower than one.
pub fn parse_target(arg: &str) -> Result<usize, ClusteringError> {
    let target = arg
        .trim()
        .parse::<i64>()
        .map_err(|_| ClusteringError::Conversion(format!("{arg:?} is not an integer")))?;
    if target < 1 {
        return Err(ClusteringError::InvalidTarget(format!(
            "at least one cluster is required, got {target}"
        )));
    }
    usize::try_from(target)
        .map_err(|_| ClusteringError::Conversion(format!("{target} is too large")))
}
