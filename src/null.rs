use crate::{AbsentSide, Error};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// How to behave when encountering an absent operand in a comparison
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum NullPolicy {
    /// An absent operand is lower than any present one
    NullLower,

    /// An absent operand is higher than any present one
    NullHigher,

    /// An absent operand is equal to anything
    NullEqual,

    /// An absent operand is an error
    NullThrow,
}

impl Default for NullPolicy {
    fn default() -> Self {
        NullPolicy::NullThrow
    }
}

impl NullPolicy {
    /// Every null policy
    pub const ALL: [NullPolicy; 4] = [
        NullPolicy::NullLower,
        NullPolicy::NullHigher,
        NullPolicy::NullEqual,
        NullPolicy::NullThrow,
    ];

    /// The policy to use once the underlying order is reversed. Lower and
    /// higher trade places, the rest are unaffected.
    ///
    /// ```
    /// use readable_compare::NullPolicy;
    /// assert_eq!(NullPolicy::NullLower.reversed(), NullPolicy::NullHigher);
    /// assert_eq!(NullPolicy::NullHigher.reversed(), NullPolicy::NullLower);
    /// assert_eq!(NullPolicy::NullEqual.reversed(), NullPolicy::NullEqual);
    /// assert_eq!(NullPolicy::NullThrow.reversed(), NullPolicy::NullThrow);
    /// ```
    pub const fn reversed(self) -> NullPolicy {
        match self {
            NullPolicy::NullLower => NullPolicy::NullHigher,
            NullPolicy::NullHigher => NullPolicy::NullLower,
            x => x,
        }
    }

    /// Returns if the policy fails on absent operands
    pub const fn is_throw(self) -> bool {
        matches!(self, NullPolicy::NullThrow)
    }

    /// Resolve the three-way result when at least one operand is absent.
    ///
    /// ```
    /// use readable_compare::{AbsentSide, NullPolicy};
    /// use std::cmp::Ordering;
    ///
    /// let policy = NullPolicy::NullLower;
    /// assert_eq!(policy.resolve(AbsentSide::First).unwrap(), Ordering::Less);
    /// assert_eq!(policy.resolve(AbsentSide::Second).unwrap(), Ordering::Greater);
    /// assert_eq!(policy.resolve(AbsentSide::Both).unwrap(), Ordering::Equal);
    /// assert!(NullPolicy::NullThrow.resolve(AbsentSide::Both).is_err());
    /// ```
    pub fn resolve(self, side: AbsentSide) -> Result<Ordering, Error> {
        self.lenient(side).ok_or_else(|| Error::null_operand(side))
    }

    /// Resolution for every policy but `NullThrow`, which yields `None`
    pub(crate) fn lenient(self, side: AbsentSide) -> Option<Ordering> {
        match (self, side) {
            (NullPolicy::NullThrow, _) => None,
            (NullPolicy::NullEqual, _) | (_, AbsentSide::Both) => Some(Ordering::Equal),
            (NullPolicy::NullLower, AbsentSide::First) => Some(Ordering::Less),
            (NullPolicy::NullLower, AbsentSide::Second) => Some(Ordering::Greater),
            (NullPolicy::NullHigher, AbsentSide::First) => Some(Ordering::Greater),
            (NullPolicy::NullHigher, AbsentSide::Second) => Some(Ordering::Less),
        }
    }

    /// Returns the name of the policy
    ///
    /// ```
    /// use readable_compare::NullPolicy;
    /// assert_eq!(NullPolicy::NullLower.name(), "NULL_LOWER");
    /// assert_eq!(NullPolicy::NullHigher.name(), "NULL_HIGHER");
    /// assert_eq!(NullPolicy::NullEqual.name(), "NULL_EQUAL");
    /// assert_eq!(NullPolicy::NullThrow.name(), "NULL_THROW");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            NullPolicy::NullLower => "NULL_LOWER",
            NullPolicy::NullHigher => "NULL_HIGHER",
            NullPolicy::NullEqual => "NULL_EQUAL",
            NullPolicy::NullThrow => "NULL_THROW",
        }
    }
}

impl Display for NullPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NullPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NULL_LOWER" => Ok(NullPolicy::NullLower),
            "NULL_HIGHER" => Ok(NullPolicy::NullHigher),
            "NULL_EQUAL" => Ok(NullPolicy::NullEqual),
            "NULL_THROW" => Ok(NullPolicy::NullThrow),
            _ => Err(Error::unrecognized("null policy", s)),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NullPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct NullPolicyVisitor;

        impl<'de> serde::de::Visitor<'de> for NullPolicyVisitor {
            type Value = NullPolicy;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a null policy")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }
        deserializer.deserialize_str(NullPolicyVisitor)
    }
}
