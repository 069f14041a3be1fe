use std::fmt;

use crate::error::{Error, Result};

/// Inclusive numeric range rendered as a zero-padded fixed-width string.
///
/// Encoded in locale data as `"LOW-HIGH"` or a single `"VALUE"`
/// (`"02601-02699"`, `"85000-85099"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRange {
    pub low: u32,
    pub high: u32,
    pub width: usize,
}

impl NumericRange {
    pub fn parse(raw: &str, width: usize) -> Result<Self> {
        let raw = raw.trim();
        let (low, high) = match raw.split_once('-') {
            Some((low, high)) => (low.trim(), high.trim()),
            None => (raw, raw),
        };
        let low = parse_bound(low, raw, width)?;
        let high = parse_bound(high, raw, width)?;
        if low > high {
            return Err(Error::InvalidLocaleData(format!(
                "range '{raw}' has low > high"
            )));
        }
        Ok(Self { low, high, width })
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Zero-pad a value to the range width.
    pub fn render(&self, value: u32) -> String {
        format!("{value:0width$}", width = self.width)
    }
}

fn parse_bound(bound: &str, raw: &str, width: usize) -> Result<u32> {
    if bound.is_empty() || bound.len() > width || !bound.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(Error::InvalidLocaleData(format!(
            "range '{raw}' must hold numbers of at most {width} digits"
        )));
    }
    bound
        .parse()
        .map_err(|_| Error::InvalidLocaleData(format!("range '{raw}' is not numeric")))
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.render(self.low), self.render(self.high))
    }
}
