use crate::table::IcebergTable;
use crate::table::constants::{Key, Value};
use crate::table::digest::KeyHasher;
use crate::table::traits::{TableReader, TableWriter};
use std::io::{BufRead, Write};

/// One line of an operation script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOp {
    Insert { key: Key, value: Value },
    Remove { key: Key, value: Value },
    Lookup { key: Key },
    Contains { key: Key },
    Stats,
}

/// Parses one script line. Returns `Ok(None)` for blank and comment-only
/// lines.
///
/// ```
/// use simd_iceberg::cli::{ScriptOp, parse_line};
///
/// assert_eq!(
///     parse_line("insert 7 700  # seven"),
///     Ok(Some(ScriptOp::Insert { key: 7, value: 700 }))
/// );
/// assert_eq!(parse_line("   # nothing here"), Ok(None));
/// assert!(parse_line("lookup").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Option<ScriptOp>, String> {
    let line = line.split('#').next().unwrap_or_default();
    let mut tokens = line.split_whitespace();

    let Some(op) = tokens.next() else {
        return Ok(None);
    };

    let mut number = |name: &str| -> Result<u64, String> {
        let token = tokens
            .next()
            .ok_or_else(|| format!("`{}` is missing <{}>", op, name))?;
        token
            .parse::<u64>()
            .map_err(|_| format!("Invalid {} `{}`", name, token))
    };

    let parsed = match op.to_lowercase().as_str() {
        "insert" => ScriptOp::Insert {
            key: number("key")?,
            value: number("value")?,
        },
        "remove" => ScriptOp::Remove {
            key: number("key")?,
            value: number("value")?,
        },
        "lookup" | "get" => ScriptOp::Lookup {
            key: number("key")?,
        },
        "contains" => ScriptOp::Contains {
            key: number("key")?,
        },
        "stats" => ScriptOp::Stats,
        other => return Err(format!("Unknown operation `{}`", other)),
    };

    if let Some(extra) = tokens.next() {
        return Err(format!("Unexpected argument `{}`", extra));
    }

    Ok(Some(parsed))
}

/// Executes every operation read from `reader` against `table`, writing one
/// result line per operation to `out`.
///
/// Stops at the first malformed line; the error names its line number.
/// Operations before it have already been applied.
///
/// # Returns
/// - `Ok(count)`: Number of operations executed.
/// - `Err(message)`: Parse or I/O failure.
pub fn run_script<S, R, W>(table: &mut IcebergTable<S>, reader: R, out: &mut W) -> Result<usize, String>
where
    S: KeyHasher,
    R: BufRead,
    W: Write,
{
    let mut executed = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read script: {}", e))?;

        let Some(op) = parse_line(&line).map_err(|e| format!("line {}: {}", line_no + 1, e))?
        else {
            continue;
        };

        let result = match op {
            ScriptOp::Insert { key, value } => {
                if table.insert(key, value) {
                    "inserted".to_string()
                } else {
                    "full".to_string()
                }
            }
            ScriptOp::Remove { key, value } => {
                if table.remove(key, value) {
                    "removed".to_string()
                } else {
                    "not found".to_string()
                }
            }
            ScriptOp::Lookup { key } => match table.lookup(key) {
                Some(value) => value.to_string(),
                None => "not found".to_string(),
            },
            ScriptOp::Contains { key } => table.contains(key).to_string(),
            ScriptOp::Stats => {
                let stats = table.stats();
                format!(
                    "len={} load_factor={:.4} full_blocks={}",
                    stats.len,
                    stats.load_factor(),
                    stats.full_blocks
                )
            }
        };

        writeln!(out, "{}", result).map_err(|e| format!("Failed to write output: {}", e))?;
        executed += 1;
    }

    Ok(executed)
}
