//! Coordinate text format.
//!
//! Each `(` opens a path; the numbers inside are read in pairs as `x y`
//! points until the matching `)` (or the next `(`, or the end of input).
//! Anything that is not part of a number separates numbers, so
//! `(1 1, 5 6; 4 3)` and `(1 1 5 6 4 3)` describe the same triangle.
//! Numbers outside parentheses are ignored. Fractional numbers are rounded to
//! the nearest integer, halves away from zero, rather than truncated, so
//! `2.7` reads as `3` and `-2.5` as `-3`.
//!
//! ```
//! use geoclip::text::{format_paths, parse_paths};
//!
//! let paths = parse_paths("(1 1 5 6 4 3)(1 4 4 5 6 2)").unwrap();
//! assert_eq!(paths.len(), 2);
//! assert_eq!(format_paths(&paths), "(1 1 5 6 4 3)\n(1 4 4 5 6 2)\n");
//! ```

use crate::error::{ParseError, Result};
use crate::geometry::{Path, PathSet};
use crate::math::{IntPoint, MAX_COORD};

/// Parses coordinate text into a path set.
///
/// Fractional values are rounded to the nearest integer. A trailing number
/// without a partner is ignored, and groups with no complete point are
/// skipped.
///
/// # Errors
///
/// Returns `ParseError::NumberOutOfRange` for a number whose magnitude
/// exceeds [`MAX_COORD`].
pub fn parse_paths(text: &str) -> Result<PathSet> {
    let bytes = text.as_bytes();
    let mut paths = PathSet::new();
    let mut group: Option<Vec<i64>> = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                finish_group(group.replace(Vec::new()), &mut paths);
                i += 1;
            }
            b')' => {
                finish_group(group.take(), &mut paths);
                i += 1;
            }
            _ if starts_number(bytes, i) => {
                let end = number_end(bytes, i);
                if let Some(values) = group.as_mut() {
                    values.push(parse_number(&text[i..end], i)?);
                }
                i = end;
            }
            _ => i += 1,
        }
    }
    finish_group(group, &mut paths);
    Ok(paths)
}

/// Formats a path set as one `(x y x y ...)` group per line.
#[must_use]
pub fn format_paths(paths: &PathSet) -> String {
    paths.to_string()
}

fn finish_group(group: Option<Vec<i64>>, paths: &mut PathSet) {
    let Some(values) = group else {
        return;
    };
    let path: Path = values
        .chunks_exact(2)
        .map(|pair| IntPoint::new(pair[0], pair[1]))
        .collect();
    if !path.is_empty() {
        paths.push(path);
    }
}

fn starts_number(bytes: &[u8], i: usize) -> bool {
    match bytes[i] {
        b'0'..=b'9' => true,
        b'-' => bytes.get(i + 1).is_some_and(u8::is_ascii_digit),
        _ => false,
    }
}

/// End of the number starting at `start`: `-?digits(.digits)?`.
fn number_end(bytes: &[u8], start: usize) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };
    let mut i = if bytes[start] == b'-' { start + 1 } else { start };
    i = digits_from(i);
    if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
        i = digits_from(i + 1);
    }
    i
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn parse_number(slice: &str, offset: usize) -> std::result::Result<i64, ParseError> {
    let out_of_range = || ParseError::NumberOutOfRange {
        text: slice.to_string(),
        offset,
    };
    let value = slice.parse::<f64>().map_err(|_| out_of_range())?.round();
    if !value.is_finite() || value.abs() > MAX_COORD as f64 {
        return Err(out_of_range());
    }
    Ok(value as i64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeoclipError;

    #[test]
    fn demo_example() {
        let paths = parse_paths("(1 1 5 6 4 3)(1 4 4 5 6 2)").unwrap();
        assert_eq!(
            paths,
            PathSet::from(vec![
                Path::from_coords(&[(1, 1), (5, 6), (4, 3)]),
                Path::from_coords(&[(1, 4), (4, 5), (6, 2)]),
            ])
        );
    }

    #[test]
    fn separators_and_negatives() {
        let paths = parse_paths("( -1,2; 3 , -4\n\t5x6 )").unwrap();
        assert_eq!(
            paths.paths[0],
            Path::from_coords(&[(-1, 2), (3, -4), (5, 6)])
        );
    }

    #[test]
    fn fractions_are_rounded() {
        let paths = parse_paths("(0.4 1.5 -2.5 3.49)").unwrap();
        assert_eq!(paths.paths[0], Path::from_coords(&[(0, 2), (-3, 3)]));
    }

    #[test]
    fn trailing_odd_number_is_ignored() {
        let paths = parse_paths("(1 2 3 4 5)").unwrap();
        assert_eq!(paths.paths[0], Path::from_coords(&[(1, 2), (3, 4)]));
    }

    #[test]
    fn unclosed_and_empty_groups() {
        let paths = parse_paths("() (7) (1 2 3 4 5 6").unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths.paths[0].len(), 3);
    }

    #[test]
    fn new_group_closes_previous() {
        let paths = parse_paths("(1 2 3 4 (5 6 7 8)").unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths.paths[1], Path::from_coords(&[(5, 6), (7, 8)]));
    }

    #[test]
    fn numbers_outside_groups_are_ignored() {
        let paths = parse_paths("99 98 (1 2 3 4 5 6) 97 96").unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths.point_count(), 3);
        assert!(parse_paths("no groups here 1 2 3").unwrap().is_empty());
    }

    #[test]
    fn out_of_range_number() {
        let err = parse_paths("(0 0 1 99999999999999999999)").unwrap_err();
        match err {
            GeoclipError::Parse(ParseError::NumberOutOfRange { text, offset }) => {
                assert_eq!(text, "99999999999999999999");
                assert_eq!(offset, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn format_round_trips() {
        let text = "(0 0 4 0 4 4 0 4)\n(-2 -2 -1 -2 -1 -1)\n";
        let paths = parse_paths(text).unwrap();
        assert_eq!(format_paths(&paths), text);
    }
}
