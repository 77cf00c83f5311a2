use crate::{Error, Operator};
use std::fmt::Display;
use std::str::FromStr;

/// Inclusivity of the endpoints of a range
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum BoundMode {
    /// Including min and max
    IncInc,

    /// Including min excluding max
    IncExc,

    /// Excluding min including max
    ExcInc,

    /// Excluding min and max
    ExcExc,
}

impl BoundMode {
    /// Every bound mode
    pub const ALL: [BoundMode; 4] = [
        BoundMode::IncInc,
        BoundMode::IncExc,
        BoundMode::ExcInc,
        BoundMode::ExcExc,
    ];

    /// Create a bound mode from the inclusivity of each endpoint
    ///
    /// ```
    /// use readable_compare::BoundMode;
    /// assert_eq!(BoundMode::from_inclusivity(true, false), BoundMode::IncExc);
    /// assert_eq!(BoundMode::from_inclusivity(false, true), BoundMode::ExcInc);
    /// ```
    pub const fn from_inclusivity(lower: bool, upper: bool) -> BoundMode {
        match (lower, upper) {
            (true, true) => BoundMode::IncInc,
            (true, false) => BoundMode::IncExc,
            (false, true) => BoundMode::ExcInc,
            (false, false) => BoundMode::ExcExc,
        }
    }

    pub const fn lower_inclusive(self) -> bool {
        matches!(self, BoundMode::IncInc | BoundMode::IncExc)
    }

    pub const fn upper_inclusive(self) -> bool {
        matches!(self, BoundMode::IncInc | BoundMode::ExcInc)
    }

    /// The operator that must hold for `min ? value` when the value is
    /// inside the range
    pub fn lower_operator(self) -> Operator {
        if self.lower_inclusive() {
            Operator::LessEq
        } else {
            Operator::Less
        }
    }

    /// The operator that must hold for `value ? max` when the value is
    /// inside the range
    pub fn upper_operator(self) -> Operator {
        if self.upper_inclusive() {
            Operator::LessEq
        } else {
            Operator::Less
        }
    }

    /// Returns the name of the bound mode
    ///
    /// ```
    /// use readable_compare::BoundMode;
    /// assert_eq!(BoundMode::IncInc.name(), "INC_INC");
    /// assert_eq!(BoundMode::IncExc.name(), "INC_EXC");
    /// assert_eq!(BoundMode::ExcInc.name(), "EXC_INC");
    /// assert_eq!(BoundMode::ExcExc.name(), "EXC_EXC");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            BoundMode::IncInc => "INC_INC",
            BoundMode::IncExc => "INC_EXC",
            BoundMode::ExcInc => "EXC_INC",
            BoundMode::ExcExc => "EXC_EXC",
        }
    }
}

impl Display for BoundMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INC_INC" => Ok(BoundMode::IncInc),
            "INC_EXC" => Ok(BoundMode::IncExc),
            "EXC_INC" => Ok(BoundMode::ExcInc),
            "EXC_EXC" => Ok(BoundMode::ExcExc),
            _ => Err(Error::unrecognized("bound mode", s)),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BoundMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BoundModeVisitor;

        impl<'de> serde::de::Visitor<'de> for BoundModeVisitor {
            type Value = BoundMode;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a bound mode")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }
        deserializer.deserialize_str(BoundModeVisitor)
    }
}
