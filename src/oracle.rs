use std::fs;

use crate::error::{OracleError, Result};
use crate::geometry::Path;
use crate::math::Point2;

/// An on-disk trajectory test case.
///
/// The text format is six lines: the reference path's x-coordinates and
/// y-coordinates as comma-separated lists, the measured path's x- and
/// y-coordinates likewise, the expected error, and the allowed tolerance.
/// Tokens may carry surrounding whitespace.
#[derive(Debug, Clone)]
pub struct Oracle {
    pub reference: Path,
    pub measured: Path,
    pub expected: f64,
    pub tolerance: f64,
}

impl Oracle {
    /// Reads an oracle from a file.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Io`] if the file cannot be read, plus any of
    /// the parse errors from [`Oracle::parse`].
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(OracleError::Io)?;
        Self::parse(&text)
    }

    /// Parses an oracle from its six-line text form.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::MissingLine`] if fewer than six lines are
    /// present, [`OracleError::InvalidNumber`] on an unparsable token, and
    /// [`OracleError::AxisMismatch`] when a path's two coordinate lines
    /// disagree in length.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();

        let ref_xs = parse_axis(&mut lines, "reference x")?;
        let ref_ys = parse_axis(&mut lines, "reference y")?;
        let meas_xs = parse_axis(&mut lines, "measured x")?;
        let meas_ys = parse_axis(&mut lines, "measured y")?;
        let expected = parse_scalar(&mut lines, "expected result")?;
        let tolerance = parse_scalar(&mut lines, "tolerance")?;

        Ok(Self {
            reference: zip_axes(ref_xs, ref_ys, "reference")?,
            measured: zip_axes(meas_xs, meas_ys, "measured")?,
            expected,
            tolerance,
        })
    }

    /// Tests a computed error against the expected band. Both bounds are
    /// strict: a value exactly at `expected ± tolerance` is rejected.
    #[must_use]
    pub fn accepts(&self, value: f64) -> bool {
        value > self.expected - self.tolerance && value < self.expected + self.tolerance
    }
}

fn parse_axis(
    lines: &mut std::str::Lines<'_>,
    name: &'static str,
) -> std::result::Result<Vec<f64>, OracleError> {
    let line = lines.next().ok_or(OracleError::MissingLine(name))?;
    line.split(',').map(|token| parse_number(token, name)).collect()
}

fn parse_scalar(
    lines: &mut std::str::Lines<'_>,
    name: &'static str,
) -> std::result::Result<f64, OracleError> {
    let line = lines.next().ok_or(OracleError::MissingLine(name))?;
    parse_number(line, name)
}

fn parse_number(token: &str, line: &'static str) -> std::result::Result<f64, OracleError> {
    let token = token.trim();
    token.parse().map_err(|_| OracleError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn zip_axes(
    xs: Vec<f64>,
    ys: Vec<f64>,
    name: &'static str,
) -> std::result::Result<Path, OracleError> {
    if xs.len() != ys.len() {
        return Err(OracleError::AxisMismatch {
            path: name,
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    let points = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Point2::new(x, y))
        .collect();
    Ok(Path::new(points))
}
