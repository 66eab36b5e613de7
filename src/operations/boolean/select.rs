use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::ParseError;

/// Rule mapping a winding number to "inside" for one operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// Inside where the winding number is odd.
    #[default]
    EvenOdd,
    /// Inside where the winding number is not zero.
    NonZero,
    /// Inside where the winding number is greater than zero.
    Positive,
    /// Inside where the winding number is less than zero.
    Negative,
}

impl FillRule {
    /// Returns `true` if a region with winding number `winding` is filled.
    #[must_use]
    pub fn is_filled(self, winding: i32) -> bool {
        match self {
            Self::EvenOdd => winding % 2 != 0,
            Self::NonZero => winding != 0,
            Self::Positive => winding > 0,
            Self::Negative => winding < 0,
        }
    }
}

impl FromStr for FillRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "evenodd" => Ok(Self::EvenOdd),
            "nonzero" => Ok(Self::NonZero),
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            _ => Err(ParseError::UnknownName {
                kind: "fill rule",
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FillRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EvenOdd => "even-odd",
            Self::NonZero => "non-zero",
            Self::Positive => "positive",
            Self::Negative => "negative",
        })
    }
}

/// The boolean combination applied to the two filled regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipOperation {
    Union,
    Intersection,
    /// Subject minus clip.
    Difference,
    Xor,
}

impl ClipOperation {
    /// Combines "filled" flags of the subject and clip at one point.
    ///
    /// | subject | clip | Union | Intersection | Difference | Xor |
    /// |---------|------|-------|--------------|------------|-----|
    /// | no      | no   | no    | no           | no         | no  |
    /// | yes     | no   | yes   | no           | yes        | yes |
    /// | no      | yes  | yes   | no           | no         | yes |
    /// | yes     | yes  | yes   | yes          | no         | no  |
    #[must_use]
    pub fn combine(self, subject: bool, clip: bool) -> bool {
        match self {
            Self::Union => subject || clip,
            Self::Intersection => subject && clip,
            Self::Difference => subject && !clip,
            Self::Xor => subject != clip,
        }
    }
}

impl FromStr for ClipOperation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "union" => Ok(Self::Union),
            "intersection" | "intersect" => Ok(Self::Intersection),
            "difference" | "subtract" => Ok(Self::Difference),
            "xor" => Ok(Self::Xor),
            _ => Err(ParseError::UnknownName {
                kind: "clip operation",
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClipOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::Difference => "difference",
            Self::Xor => "xor",
        })
    }
}

/// Which operand an edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Subject,
    Clip,
}

/// Winding numbers of both operands at one place in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Winding {
    pub subject: i32,
    pub clip: i32,
}

impl Winding {
    /// A winding contribution on one side only.
    #[must_use]
    pub fn of(side: Side, value: i32) -> Self {
        match side {
            Side::Subject => Self {
                subject: value,
                clip: 0,
            },
            Side::Clip => Self {
                subject: 0,
                clip: value,
            },
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.subject == 0 && self.clip == 0
    }
}

impl Add for Winding {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            subject: self.subject + rhs.subject,
            clip: self.clip + rhs.clip,
        }
    }
}

impl AddAssign for Winding {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Decides whether a region with given windings belongs to the result.
#[derive(Debug, Clone, Copy)]
pub(super) struct FillSelector {
    pub operation: ClipOperation,
    pub subject_fill: FillRule,
    pub clip_fill: FillRule,
}

impl FillSelector {
    pub fn is_filled(&self, winding: Winding) -> bool {
        self.operation.combine(
            self.subject_fill.is_filled(winding.subject),
            self.clip_fill.is_filled(winding.clip),
        )
    }
}
