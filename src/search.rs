use crate::errors::{RangeSearchError, Result};
use crate::models::NumericRecord;

/// A parsed range expression.
///
/// `Min` and `Max` are extremum sentinels: they resolve against the live
/// candidate pool at evaluation time, not against the original input. The
/// remaining variants compare a record's attribute value to a literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeExpr {
    Exact(f64),
    LessThan(f64),
    LessOrEqual(f64),
    GreaterThan(f64),
    GreaterOrEqual(f64),
    Min,
    Max,
}

impl RangeExpr {
    /// Parse a range expression string (`"4096"`, `"<=4096"`, `"MIN"`, ...).
    ///
    /// `attribute` is only used to label the error when the numeric part of
    /// the expression does not parse.
    pub fn parse(attribute: &str, expression: &str) -> Result<Self> {
        let raw = expression.trim();

        if raw.eq_ignore_ascii_case("MIN") {
            return Ok(RangeExpr::Min);
        }
        if raw.eq_ignore_ascii_case("MAX") {
            return Ok(RangeExpr::Max);
        }

        // Two-character prefixes first so "<=" is not read as "<" followed
        // by a stray "=".
        let (make, number): (fn(f64) -> RangeExpr, &str) =
            if let Some(rest) = raw.strip_prefix("<=") {
                (RangeExpr::LessOrEqual, rest)
            } else if let Some(rest) = raw.strip_prefix(">=") {
                (RangeExpr::GreaterOrEqual, rest)
            } else if let Some(rest) = raw.strip_prefix('<') {
                (RangeExpr::LessThan, rest)
            } else if let Some(rest) = raw.strip_prefix('>') {
                (RangeExpr::GreaterThan, rest)
            } else {
                (RangeExpr::Exact, raw)
            };

        number.trim().parse::<f64>().map(make).map_err(|_| {
            RangeSearchError::InvalidRangeExpression {
                attribute: attribute.to_string(),
                expression: expression.to_string(),
            }
        })
    }

    /// Evaluate the expression against a single value.
    ///
    /// Comparisons use standard `f64` ordering and equality, no epsilon.
    /// `Min` and `Max` return false here: extrema are only decidable
    /// against a pool, so the engine handles them in its narrowing pass.
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            RangeExpr::Exact(n) => value == n,
            RangeExpr::LessThan(n) => value < n,
            RangeExpr::LessOrEqual(n) => value <= n,
            RangeExpr::GreaterThan(n) => value > n,
            RangeExpr::GreaterOrEqual(n) => value >= n,
            RangeExpr::Min | RangeExpr::Max => false,
        }
    }
}

/// Filter records by a set of range constraints, applied in order.
///
/// Each constraint narrows the pool left by the previous one, so `MIN` and
/// `MAX` reflect the extremum among the survivors at that point in the
/// chain, not the global extremum. Records missing the constrained
/// attribute are dropped from the pool; ties at an extremum are all kept.
/// The result preserves the input order and is always a subset of the
/// input. An empty constraint list returns the input unchanged.
///
/// Fails with [`RangeSearchError::InvalidRangeExpression`] if any
/// expression does not parse; no partial result is returned.
pub fn range_search<R, K, V>(records: &[R], constraints: &[(K, V)]) -> Result<Vec<R>>
where
    R: NumericRecord + Clone,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pool: Vec<R> = records.to_vec();
    for (attribute, expression) in constraints {
        let attribute = attribute.as_ref();
        let expr = RangeExpr::parse(attribute, expression.as_ref())?;
        pool = narrow(pool, attribute, expr);
    }
    Ok(pool)
}

/// Filter records by a single range constraint.
pub fn range_filter<R, K, V>(records: &[R], attribute: K, expression: V) -> Result<Vec<R>>
where
    R: NumericRecord + Clone,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let attribute = attribute.as_ref();
    let expr = RangeExpr::parse(attribute, expression.as_ref())?;
    Ok(narrow(records.to_vec(), attribute, expr))
}

/// One narrowing pass over the pool.
fn narrow<R: NumericRecord>(pool: Vec<R>, attribute: &str, expr: RangeExpr) -> Vec<R> {
    match expr {
        RangeExpr::Min => retain_extremum(pool, attribute, f64::min),
        RangeExpr::Max => retain_extremum(pool, attribute, f64::max),
        _ => pool
            .into_iter()
            .filter(|r| {
                r.numeric_attribute(attribute)
                    .map(|v| expr.matches(v))
                    .unwrap_or(false)
            })
            .collect(),
    }
}

/// Keep every record whose attribute attains the pool extremum.
fn retain_extremum<R: NumericRecord>(
    pool: Vec<R>,
    attribute: &str,
    pick: fn(f64, f64) -> f64,
) -> Vec<R> {
    let mut target: Option<f64> = None;
    for record in &pool {
        if let Some(value) = record.numeric_attribute(attribute) {
            target = Some(match target {
                Some(current) => pick(current, value),
                None => value,
            });
        }
    }

    match target {
        Some(extremum) => pool
            .into_iter()
            .filter(|r| r.numeric_attribute(attribute) == Some(extremum))
            .collect(),
        // No record carries the attribute, so nothing can attain it.
        None => Vec::new(),
    }
}
