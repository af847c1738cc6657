use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantityParseError {
    #[error("empty quantity string")]
    Empty,
    #[error("invalid number in quantity {0:?}")]
    InvalidNumber(String),
    #[error("unknown unit suffix in quantity {0:?}")]
    UnknownSuffix(String),
    #[error("quantity {0:?} is outside the representable range")]
    OutOfRange(String),
}

/// CPU time-share, stored as nanocores — the finest scale the metrics API
/// serializes, so sums across differently-suffixed inputs stay exact.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CpuQuantity {
    nanocores: i64,
}

/// Memory amount, stored as bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoryQuantity {
    bytes: i64,
}

const NANOS_PER_CORE: i128 = 1_000_000_000;

impl CpuQuantity {
    pub const ZERO: Self = Self { nanocores: 0 };

    pub const fn from_nanocores(nanocores: i64) -> Self {
        Self { nanocores }
    }

    pub const fn from_millicores(millicores: i64) -> Self {
        Self {
            nanocores: millicores.saturating_mul(1_000_000),
        }
    }

    pub const fn nanocores(self) -> i64 {
        self.nanocores
    }

    /// Whole millicores, truncating any sub-millicore remainder.
    pub const fn millicores(self) -> i64 {
        self.nanocores / 1_000_000
    }

    pub const fn is_zero(self) -> bool {
        self.nanocores == 0
    }

    pub fn parse(q: &str) -> Result<Self, QuantityParseError> {
        parse_scaled(q, NANOS_PER_CORE).map(Self::from_nanocores)
    }
}

impl MemoryQuantity {
    pub const ZERO: Self = Self { bytes: 0 };

    pub const fn from_bytes(bytes: i64) -> Self {
        Self { bytes }
    }

    pub const fn bytes(self) -> i64 {
        self.bytes
    }

    pub const fn is_zero(self) -> bool {
        self.bytes == 0
    }

    pub fn parse(q: &str) -> Result<Self, QuantityParseError> {
        parse_scaled(q, 1).map(Self::from_bytes)
    }
}

impl Add for CpuQuantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            nanocores: self.nanocores.saturating_add(rhs.nanocores),
        }
    }
}

impl AddAssign for CpuQuantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Add for MemoryQuantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            bytes: self.bytes.saturating_add(rhs.bytes),
        }
    }
}

impl AddAssign for MemoryQuantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl FromStr for CpuQuantity {
    type Err = QuantityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for MemoryQuantity {
    type Err = QuantityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CpuQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.nanocores;
        if n == 0 {
            f.write_str("0")
        } else if n % 1_000_000_000 == 0 {
            write!(f, "{}", n / 1_000_000_000)
        } else if n % 1_000_000 == 0 {
            write!(f, "{}m", n / 1_000_000)
        } else if n % 1_000 == 0 {
            write!(f, "{}u", n / 1_000)
        } else {
            write!(f, "{}n", n)
        }
    }
}

impl fmt::Display for MemoryQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BINARY_UNITS: &[(&str, i64)] = &[
            ("Ei", 1 << 60),
            ("Pi", 1 << 50),
            ("Ti", 1 << 40),
            ("Gi", 1 << 30),
            ("Mi", 1 << 20),
            ("Ki", 1 << 10),
        ];

        let b = self.bytes;
        if b == 0 {
            return f.write_str("0");
        }
        for (suffix, unit) in BINARY_UNITS {
            if b % unit == 0 {
                return write!(f, "{}{}", b / unit, suffix);
            }
        }
        write!(f, "{}", b)
    }
}

// Shared parser for the Kubernetes quantity grammar: optional sign, decimal
// number, optional scale suffix. `base` scales the unit-less form into the
// canonical representation (nanocores per core for CPU, 1 for memory bytes).
// All arithmetic is integer; fractions below the canonical scale round away
// from zero, as apimachinery does.
fn parse_scaled(q: &str, base: i128) -> Result<i64, QuantityParseError> {
    let trimmed = q.trim();
    if trimmed.is_empty() {
        return Err(QuantityParseError::Empty);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let boundary = unsigned
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(unsigned.len());
    let (body, suffix) = unsigned.split_at(boundary);
    let (scale_num, scale_den) = suffix_factor(suffix)
        .ok_or_else(|| QuantityParseError::UnknownSuffix(trimmed.to_string()))?;

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (body, ""),
    };
    if (int_part.is_empty() && frac_part.is_empty()) || frac_part.contains('.') {
        return Err(QuantityParseError::InvalidNumber(trimmed.to_string()));
    }

    let frac_part = frac_part.trim_end_matches('0');
    let out_of_range = || QuantityParseError::OutOfRange(trimmed.to_string());

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let mantissa = if digits.is_empty() {
        0i128
    } else {
        digits.parse::<i128>().map_err(|_| out_of_range())?
    };

    let numer = mantissa
        .checked_mul(base)
        .and_then(|v| v.checked_mul(scale_num))
        .ok_or_else(out_of_range)?;
    let denom = 10i128
        .checked_pow(frac_part.len() as u32)
        .and_then(|p| p.checked_mul(scale_den))
        .ok_or_else(out_of_range)?;

    let mut value = numer / denom;
    if numer % denom != 0 {
        value += 1;
    }
    if negative {
        value = -value;
    }
    i64::try_from(value).map_err(|_| out_of_range())
}

fn suffix_factor(suffix: &str) -> Option<(i128, i128)> {
    const KI: i128 = 1024;
    Some(match suffix {
        "" => (1, 1),
        "n" => (1, 1_000_000_000),
        "u" => (1, 1_000_000),
        "m" => (1, 1_000),
        // Decimal SI; uppercase K tolerated alongside the canonical k.
        "k" | "K" => (1_000, 1),
        "M" => (1_000_000, 1),
        "G" => (1_000_000_000, 1),
        "T" => (1_000_000_000_000, 1),
        "P" => (1_000_000_000_000_000, 1),
        "E" => (1_000_000_000_000_000_000, 1),
        "Ki" => (KI, 1),
        "Mi" => (KI.pow(2), 1),
        "Gi" => (KI.pow(3), 1),
        "Ti" => (KI.pow(4), 1),
        "Pi" => (KI.pow(5), 1),
        "Ei" => (KI.pow(6), 1),
        _ => return None,
    })
}
