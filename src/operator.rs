use crate::Error;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// A pairwise comparison operator
///
/// An operator is tested against the three-way result of comparing the left
/// hand operand to the right hand operand.
///
/// ```
/// use readable_compare::Operator;
/// use std::cmp::Ordering;
///
/// assert!(Operator::Less.test(1.cmp(&2)));
/// assert!(Operator::GreaterEq.test(Ordering::Equal));
/// assert!(!Operator::NotEq.test(Ordering::Equal));
/// ```
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Operator {
    /// A `<` operator
    Less,

    /// A `<=` operator
    LessEq,

    /// A `>` operator
    Greater,

    /// A `>=` operator
    GreaterEq,

    /// A `==` operator
    Eq,

    /// A `!=` operator
    NotEq,
}

impl Operator {
    /// Every operator
    pub const ALL: [Operator; 6] = [
        Operator::Less,
        Operator::LessEq,
        Operator::Greater,
        Operator::GreaterEq,
        Operator::Eq,
        Operator::NotEq,
    ];

    /// Returns if the operator holds for the given three-way result
    #[inline]
    pub fn test(self, ordering: Ordering) -> bool {
        match self {
            Operator::Less => ordering == Ordering::Less,
            Operator::LessEq => ordering != Ordering::Greater,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::GreaterEq => ordering != Ordering::Less,
            Operator::Eq => ordering == Ordering::Equal,
            Operator::NotEq => ordering != Ordering::Equal,
        }
    }

    /// Returns if the operator holds for a signed three-way result. Only the
    /// sign is significant.
    ///
    /// ```
    /// use readable_compare::Operator;
    /// assert!(Operator::Less.test_sign(-42));
    /// assert!(Operator::LessEq.test_sign(0));
    /// assert!(!Operator::Greater.test_sign(0));
    /// ```
    #[inline]
    pub fn test_sign(self, sign: i32) -> bool {
        self.test(three_way_from_sign(sign))
    }

    /// Returns the operator that holds exactly when this one does not
    ///
    /// ```
    /// use readable_compare::Operator;
    /// assert_eq!(Operator::Less.negate(), Operator::GreaterEq);
    /// assert_eq!(Operator::Greater.negate(), Operator::LessEq);
    /// assert_eq!(Operator::Eq.negate(), Operator::NotEq);
    /// ```
    pub fn negate(self) -> Operator {
        match self {
            Operator::Less => Operator::GreaterEq,
            Operator::LessEq => Operator::Greater,
            Operator::Greater => Operator::LessEq,
            Operator::GreaterEq => Operator::Less,
            Operator::Eq => Operator::NotEq,
            Operator::NotEq => Operator::Eq,
        }
    }

    /// Returns the operator that gives the same answer when the operands
    /// change places
    ///
    /// ```
    /// use readable_compare::Operator;
    /// assert_eq!(Operator::Less.swap(), Operator::Greater);
    /// assert_eq!(Operator::GreaterEq.swap(), Operator::LessEq);
    /// assert_eq!(Operator::NotEq.swap(), Operator::NotEq);
    /// ```
    pub fn swap(self) -> Operator {
        match self {
            Operator::Less => Operator::Greater,
            Operator::LessEq => Operator::GreaterEq,
            Operator::Greater => Operator::Less,
            Operator::GreaterEq => Operator::LessEq,
            Operator::Eq => Operator::Eq,
            Operator::NotEq => Operator::NotEq,
        }
    }

    /// Returns the symbol of the operator
    ///
    /// ```
    /// use readable_compare::Operator;
    /// assert_eq!(Operator::Less.symbol(), "<");
    /// assert_eq!(Operator::LessEq.symbol(), "<=");
    /// assert_eq!(Operator::Greater.symbol(), ">");
    /// assert_eq!(Operator::GreaterEq.symbol(), ">=");
    /// assert_eq!(Operator::Eq.symbol(), "==");
    /// assert_eq!(Operator::NotEq.symbol(), "!=");
    /// ```
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Less => "<",
            Operator::LessEq => "<=",
            Operator::Greater => ">",
            Operator::GreaterEq => ">=",
            Operator::Eq => "==",
            Operator::NotEq => "!=",
        }
    }

    /// Returns the name of the operator using only letters
    ///
    /// ```
    /// use readable_compare::Operator;
    /// assert_eq!(Operator::Less.name(), "LESS");
    /// assert_eq!(Operator::LessEq.name(), "LESS_EQ");
    /// assert_eq!(Operator::Greater.name(), "GREATER");
    /// assert_eq!(Operator::GreaterEq.name(), "GREATER_EQ");
    /// assert_eq!(Operator::Eq.name(), "EQ");
    /// assert_eq!(Operator::NotEq.name(), "NOT_EQ");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Less => "LESS",
            Operator::LessEq => "LESS_EQ",
            Operator::Greater => "GREATER",
            Operator::GreaterEq => "GREATER_EQ",
            Operator::Eq => "EQ",
            Operator::NotEq => "NOT_EQ",
        }
    }
}

/// Map a signed three-way result onto an [`Ordering`] by its sign
///
/// ```
/// use readable_compare::three_way_from_sign;
/// use std::cmp::Ordering;
/// assert_eq!(three_way_from_sign(-7), Ordering::Less);
/// assert_eq!(three_way_from_sign(0), Ordering::Equal);
/// assert_eq!(three_way_from_sign(i32::MAX), Ordering::Greater);
/// ```
#[inline]
pub fn three_way_from_sign(sign: i32) -> Ordering {
    sign.cmp(&0)
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = Error;

    /// Parse an operator from either its symbol or its name
    ///
    /// ```
    /// use readable_compare::Operator;
    /// assert_eq!("<=".parse::<Operator>().unwrap(), Operator::LessEq);
    /// assert_eq!("NOT_EQ".parse::<Operator>().unwrap(), Operator::NotEq);
    /// assert!("=<".parse::<Operator>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" | "LESS" => Ok(Operator::Less),
            "<=" | "LESS_EQ" => Ok(Operator::LessEq),
            ">" | "GREATER" => Ok(Operator::Greater),
            ">=" | "GREATER_EQ" => Ok(Operator::GreaterEq),
            "==" | "EQ" => Ok(Operator::Eq),
            "!=" | "NOT_EQ" => Ok(Operator::NotEq),
            _ => Err(Error::unrecognized("operator", s)),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Operator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct OperatorVisitor;

        impl<'de> serde::de::Visitor<'de> for OperatorVisitor {
            type Value = Operator;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an operator")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }
        deserializer.deserialize_str(OperatorVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rstest::*;

    #[rstest]
    #[case(Operator::Less, [true, false, false])]
    #[case(Operator::LessEq, [true, true, false])]
    #[case(Operator::Greater, [false, false, true])]
    #[case(Operator::GreaterEq, [false, true, true])]
    #[case(Operator::Eq, [false, true, false])]
    #[case(Operator::NotEq, [true, false, true])]
    fn test_operator_table(#[case] op: Operator, #[case] expected: [bool; 3]) {
        let actual = [
            op.test(Ordering::Less),
            op.test(Ordering::Equal),
            op.test(Ordering::Greater),
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_symbol_and_name_parse() {
        for op in Operator::ALL.iter() {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), *op);
            assert_eq!(op.name().parse::<Operator>().unwrap(), *op);
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_unrecognized_operator() {
        let err = "<>".parse::<Operator>().unwrap_err();
        assert!(matches!(
            err.kind(),
            crate::ErrorKind::InvalidArgument(crate::ArgumentError::Unrecognized {
                expected: "operator",
                ..
            })
        ));
    }

    #[test]
    fn test_negate_and_swap_involutions() {
        for op in Operator::ALL.iter() {
            assert_eq!(op.negate().negate(), *op);
            assert_eq!(op.swap().swap(), *op);
        }
    }

    #[quickcheck]
    fn negate_is_complement(sign: i32) -> bool {
        Operator::ALL
            .iter()
            .all(|op| op.test_sign(sign) != op.negate().test_sign(sign))
    }

    #[quickcheck]
    fn swap_matches_reversed_operands(a: i32, b: i32) -> bool {
        Operator::ALL
            .iter()
            .all(|op| op.test(a.cmp(&b)) == op.swap().test(b.cmp(&a)))
    }
}
