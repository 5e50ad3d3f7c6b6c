//! Binary size units and byte conversion.
//!
//! Every displayed size goes through this module. Units form the ordered
//! sequence `B < KiB < MiB < GiB < TiB`, each 1024 times the previous one.
//! Conversion is a plain division by `1024^k`; the only lossy step is the
//! display rounding done by [`format_value`].

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::Serialize;

/// A binary size unit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub enum Unit {
    /// Bytes
    B,
    /// Kibibytes (1024 B)
    KiB,
    /// Mebibytes (1024 KiB)
    MiB,
    /// Gibibytes (1024 MiB)
    GiB,
    /// Tebibytes (1024 GiB)
    TiB,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Self; 5] = [Self::B, Self::KiB, Self::MiB, Self::GiB, Self::TiB];

    /// Position of the unit in [`Unit::ALL`], i.e. the `k` in `1024^k`.
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::B => 0,
            Self::KiB => 1,
            Self::MiB => 2,
            Self::GiB => 3,
            Self::TiB => 4,
        }
    }

    /// Number of bytes in one of this unit.
    #[must_use]
    pub const fn factor(self) -> u64 {
        1 << (10 * self.index())
    }

    /// The label used on the command line and in the output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KiB => "KiB",
            Self::MiB => "MiB",
            Self::GiB => "GiB",
            Self::TiB => "TiB",
        }
    }

    /// The next larger unit, or `None` for [`Unit::TiB`].
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::B => Some(Self::KiB),
            Self::KiB => Some(Self::MiB),
            Self::MiB => Some(Self::GiB),
            Self::GiB => Some(Self::TiB),
            Self::TiB => None,
        }
    }

    /// The smallest unit that keeps `bytes` below 1024, capped at [`Unit::TiB`].
    #[must_use]
    pub fn best_for(bytes: u64) -> Self {
        convert(bytes, None).1
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string does not name one of the supported units.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnknownUnit(pub String);

impl Display for UnknownUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let valid: Vec<&str> = Unit::ALL.iter().map(|u| u.label()).collect();
        write!(
            f,
            "unknown unit '{}' (expected one of {})",
            self.0,
            valid.join(", ")
        )
    }
}

impl Error for UnknownUnit {}

impl FromStr for Unit {
    type Err = UnknownUnit;

    /// Unit names are matched exactly, so `kib` is not a unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label() == s)
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

/// Convert a byte count into a display value and its unit.
///
/// With a `forced` unit the result is exactly `bytes / 1024^index(forced)`.
/// Without one, the value is divided by 1024 until it drops below 1024 or
/// the largest unit is reached.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn convert(bytes: u64, forced: Option<Unit>) -> (f64, Unit) {
    if let Some(unit) = forced {
        return (bytes as f64 / unit.factor() as f64, unit);
    }

    let mut value = bytes as f64;
    let mut unit = Unit::B;

    while value >= 1024.0 {
        let Some(next) = unit.next() else {
            break;
        };
        value /= 1024.0;
        unit = next;
    }

    (value, unit)
}

/// Render a converted value for display.
///
/// The value is rounded to 10 decimal places. Whole numbers are printed
/// without a fractional part (`2`, not `2.0`), everything else as the
/// shortest decimal that represents the rounded value.
#[must_use]
pub fn format_value(value: f64) -> String {
    let rounded = (value * 1e10).round() / 1e10;

    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

/// Convert and render a byte count as `"<value> <unit>"`.
#[must_use]
pub fn format_size(bytes: u64, forced: Option<Unit>) -> String {
    let (value, unit) = convert(bytes, forced);
    format!("{} {unit}", format_value(value))
}
