use std::fmt;

/// An error that can occur when comparing values
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    pub(crate) fn null_operand(side: AbsentSide) -> Error {
        Error::new(ErrorKind::NullOperand { side })
    }

    pub(crate) fn unrecognized(expected: &'static str, value: &str) -> Error {
        Error::from(ArgumentError::Unrecognized {
            expected,
            value: value.to_string(),
        })
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Consume the error and return the specific type of error
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns which operand was absent (if the error is about an absent operand)
    ///
    /// ```
    /// use readable_compare::{compare::cmp_any, AbsentSide, NullPolicy, Natural};
    /// let err = cmp_any(None, Some(&1), &Natural, NullPolicy::NullThrow).unwrap_err();
    /// assert_eq!(err.side(), Some(AbsentSide::First));
    /// ```
    pub fn side(&self) -> Option<AbsentSide> {
        self.0.side()
    }
}

/// Specific type of error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller supplied argument was not acceptable
    InvalidArgument(ArgumentError),

    /// An absent operand was encountered where none is permitted
    NullOperand { side: AbsentSide },

    /// A comparator was assembled without one of its parts
    NullConfiguration { missing: &'static str },
}

impl ErrorKind {
    pub fn side(&self) -> Option<AbsentSide> {
        match *self {
            ErrorKind::NullOperand { side } => Some(side),
            _ => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.0 {
            ErrorKind::InvalidArgument(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::InvalidArgument(ref err) => write!(f, "invalid argument: {}", err),
            ErrorKind::NullOperand { side } => write!(f, "received absent {}", side),
            ErrorKind::NullConfiguration { missing } => {
                write!(f, "comparator is missing its {}", missing)
            }
        }
    }
}

impl From<ArgumentError> for Error {
    fn from(error: ArgumentError) -> Self {
        Error::new(ErrorKind::InvalidArgument(error))
    }
}

/// Which of the two operands were absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsentSide {
    /// Only the first (left hand) operand
    First,

    /// Only the second (right hand) operand
    Second,

    /// Both operands
    Both,
}

impl fmt::Display for AbsentSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AbsentSide::First => f.write_str("first operand"),
            AbsentSide::Second => f.write_str("second operand"),
            AbsentSide::Both => f.write_str("first and second operands"),
        }
    }
}

/// The reason an argument was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The value did not name a known operator, null policy, or bound mode
    Unrecognized {
        expected: &'static str,
        value: String,
    },

    /// A helper that resolves absent operands received two present operands
    BothPresent,
}

impl std::error::Error for ArgumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArgumentError::Unrecognized { expected, value } => {
                write!(f, "unrecognized {}: {}", expected, value)
            }
            ArgumentError::BothPresent => f.write_str("one of the operands must be absent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::null_operand(AbsentSide::Second);
        assert_eq!(err.to_string(), "received absent second operand");

        let err = Error::unrecognized("operator", "=<");
        assert_eq!(err.to_string(), "invalid argument: unrecognized operator: =<");

        let err = Error::from(ArgumentError::BothPresent);
        assert_eq!(
            err.to_string(),
            "invalid argument: one of the operands must be absent"
        );

        let err = Error::new(ErrorKind::NullConfiguration { missing: "order" });
        assert_eq!(err.to_string(), "comparator is missing its order");
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;
        assert!(Error::unrecognized("bound mode", "INC").source().is_some());
        assert!(Error::null_operand(AbsentSide::Both).source().is_none());
    }

    #[test]
    fn test_error_side() {
        assert_eq!(
            Error::null_operand(AbsentSide::Both).side(),
            Some(AbsentSide::Both)
        );
        assert_eq!(Error::from(ArgumentError::BothPresent).side(), None);
    }

    #[test]
    fn test_memory_size() {
        assert_eq!(std::mem::size_of::<Error>(), std::mem::size_of::<usize>());
    }
}
