use anyhow::{bail, Context, Result};
use std::io::BufRead;

/// Reads one line without its trailing newline; `None` at end of input.
pub fn read_line(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = reader.read_line(&mut line).context("reading input line")?;
    if bytes == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

pub fn read_count(line: &str) -> Result<usize> {
    line.trim()
        .parse()
        .with_context(|| format!("expected a count, got {line:?}"))
}

/// Parses a ratings line: a count followed by that many integers.
pub fn read_ratings(line: &str) -> Result<Vec<i32>> {
    let mut numbers = line.split_whitespace();
    let count: usize = numbers
        .next()
        .context("missing rating count")?
        .parse()
        .context("rating count is not a number")?;
    let ratings = numbers
        .take(count)
        .map(|number| {
            number
                .parse::<i32>()
                .with_context(|| format!("rating {number:?} is not a number"))
        })
        .collect::<Result<Vec<i32>>>()?;
    if ratings.len() < count {
        bail!("expected {count} ratings, found {}", ratings.len());
    }
    Ok(ratings)
}
