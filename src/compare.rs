//! Stateless comparison functions
//!
//! Each function combines an [`Order`], a [`NullPolicy`] and (for the boolean
//! variants) an [`Operator`]. Operands are `Option<&T>` where `None` is an
//! absent operand.
//!
//! ```
//! use readable_compare::compare::{cmp_any, compare};
//! use readable_compare::{Natural, NullPolicy, Operator};
//! use std::cmp::Ordering;
//!
//! let policy = NullPolicy::NullHigher;
//! assert!(compare(None, Operator::Greater, Some(&100), &Natural, policy).unwrap());
//! assert_eq!(cmp_any(Some(&1), None, &Natural, policy).unwrap(), Ordering::Less);
//! ```

use crate::{AbsentSide, ArgumentError, Error, Natural, NullPolicy, Operator, Order};
use std::cmp::Ordering;

/// Split a pair of operands into both present values or the side that is absent
#[inline]
pub(crate) fn present<'a, T: ?Sized>(
    a: Option<&'a T>,
    b: Option<&'a T>,
) -> Result<(&'a T, &'a T), AbsentSide> {
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, None) => Err(AbsentSide::Both),
        (None, Some(_)) => Err(AbsentSide::First),
        (Some(_), None) => Err(AbsentSide::Second),
    }
}

/// Map a three-way result to the given operator
#[inline]
pub fn cmp_result_switch(ordering: Ordering, op: Operator) -> bool {
    op.test(ordering)
}

/// Three-way compare of two optional operands. Present operands are
/// delegated to the order, otherwise the null policy decides.
pub fn cmp_any<T, O>(
    a: Option<&T>,
    b: Option<&T>,
    order: &O,
    policy: NullPolicy,
) -> Result<Ordering, Error>
where
    T: ?Sized,
    O: Order<T> + ?Sized,
{
    match present(a, b) {
        Ok((a, b)) => Ok(order.order(a, b)),
        Err(side) => policy.resolve(side),
    }
}

/// Three-way compare of two operands of which at least one is absent.
///
/// Fails with an invalid argument error when both operands are present.
///
/// ```
/// use readable_compare::compare::cmp_nulls;
/// use readable_compare::NullPolicy;
/// use std::cmp::Ordering;
///
/// assert_eq!(cmp_nulls(None, Some(&5), NullPolicy::NullLower).unwrap(), Ordering::Less);
/// assert!(cmp_nulls(Some(&1), Some(&5), NullPolicy::NullLower).is_err());
/// ```
pub fn cmp_nulls<T: ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    policy: NullPolicy,
) -> Result<Ordering, Error> {
    match present(a, b) {
        Ok(_) => Err(Error::from(ArgumentError::BothPresent)),
        Err(side) => policy.resolve(side),
    }
}

/// Compare two optional operands with an operator
pub fn compare<T, O>(
    a: Option<&T>,
    op: Operator,
    b: Option<&T>,
    order: &O,
    policy: NullPolicy,
) -> Result<bool, Error>
where
    T: ?Sized,
    O: Order<T> + ?Sized,
{
    cmp_any(a, b, order, policy).map(|x| op.test(x))
}

/// Compare two operands, at least one absent, with an operator
pub fn compare_nulls<T: ?Sized>(
    a: Option<&T>,
    op: Operator,
    b: Option<&T>,
    policy: NullPolicy,
) -> Result<bool, Error> {
    cmp_nulls(a, b, policy).map(|x| op.test(x))
}

/// Compare two operands that must both be present. No null policy is
/// consulted: any absent operand is an error.
///
/// ```
/// use readable_compare::compare::compare_not_nulls;
/// use readable_compare::{AbsentSide, Natural, Operator};
///
/// assert!(compare_not_nulls(Some(&3), Operator::Less, Some(&5), &Natural).unwrap());
/// let err = compare_not_nulls(Some(&3), Operator::Less, None, &Natural).unwrap_err();
/// assert_eq!(err.side(), Some(AbsentSide::Second));
/// ```
pub fn compare_not_nulls<T, O>(
    a: Option<&T>,
    op: Operator,
    b: Option<&T>,
    order: &O,
) -> Result<bool, Error>
where
    T: ?Sized,
    O: Order<T> + ?Sized,
{
    let (a, b) = present(a, b).map_err(Error::null_operand)?;
    Ok(op.test(order.order(a, b)))
}

/// Natural order compare for the policies that never fail
#[inline]
fn cmp_natural_lenient<T: Ord + ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    policy: NullPolicy,
) -> Ordering {
    debug_assert!(!policy.is_throw());
    match present(a, b) {
        Ok((a, b)) => Natural.order(a, b),
        Err(side) => policy.lenient(side).unwrap_or(Ordering::Equal),
    }
}

/// Compare with the natural order treating an absent operand as the lower
///
/// ```
/// use readable_compare::{compare_null_lower, Operator};
/// assert!(compare_null_lower(None, Operator::Less, Some(&i32::MIN)));
/// assert!(compare_null_lower(Some(&3), Operator::Less, Some(&5)));
/// ```
pub fn compare_null_lower<T: Ord + ?Sized>(a: Option<&T>, op: Operator, b: Option<&T>) -> bool {
    op.test(cmp_null_lower(a, b))
}

/// Compare with the natural order treating an absent operand as the higher
pub fn compare_null_higher<T: Ord + ?Sized>(a: Option<&T>, op: Operator, b: Option<&T>) -> bool {
    op.test(cmp_null_higher(a, b))
}

/// Compare with the natural order treating an absent operand as equal to
/// anything
pub fn compare_null_equal<T: Ord + ?Sized>(a: Option<&T>, op: Operator, b: Option<&T>) -> bool {
    op.test(cmp_null_equal(a, b))
}

/// Three-way natural order compare treating an absent operand as the lower.
/// Suitable for `sort_by`.
///
/// ```
/// use readable_compare::cmp_null_lower;
///
/// let mut data = vec![Some(3), None, Some(1)];
/// data.sort_by(|a, b| cmp_null_lower(a.as_ref(), b.as_ref()));
/// assert_eq!(data, vec![None, Some(1), Some(3)]);
/// ```
pub fn cmp_null_lower<T: Ord + ?Sized>(a: Option<&T>, b: Option<&T>) -> Ordering {
    cmp_natural_lenient(a, b, NullPolicy::NullLower)
}

/// Three-way natural order compare treating an absent operand as the higher
///
/// ```
/// use readable_compare::cmp_null_higher;
///
/// let mut data = vec![Some(3), None, Some(1)];
/// data.sort_by(|a, b| cmp_null_higher(a.as_ref(), b.as_ref()));
/// assert_eq!(data, vec![Some(1), Some(3), None]);
/// ```
pub fn cmp_null_higher<T: Ord + ?Sized>(a: Option<&T>, b: Option<&T>) -> Ordering {
    cmp_natural_lenient(a, b, NullPolicy::NullHigher)
}

/// Three-way natural order compare treating an absent operand as equal to
/// anything
pub fn cmp_null_equal<T: Ord + ?Sized>(a: Option<&T>, b: Option<&T>) -> Ordering {
    cmp_natural_lenient(a, b, NullPolicy::NullEqual)
}
