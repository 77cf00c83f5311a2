use crate::compare;
use crate::{BoundMode, ByKey, Error, ErrorKind, Natural, NullPolicy, Operator, Order};
use crate::{Reversed, ThenComparing};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// An immutable pairing of a [`NullPolicy`] with an [`Order`].
///
/// Operands are `Option<&T>`, where `None` is an absent operand that is
/// resolved by the null policy. Every operation that may encounter an
/// absent operand returns a `Result` so that `NullPolicy::NullThrow` can
/// surface an error.
///
/// ```
/// use readable_compare::{BoundMode, Comparator, Operator};
///
/// let cmp = Comparator::<i32>::NULL_LOWER;
/// assert!(cmp.compare(Some(&3), Operator::Less, Some(&5))?);
/// assert!(cmp.compare(None, Operator::Less, Some(&i32::MIN))?);
/// assert_eq!(cmp.clamp(Some(&0), Some(&15), Some(&10))?, Some(&10));
/// assert!(!cmp.inside(BoundMode::IncExc, Some(&0), Some(&10), Some(&10))?);
/// # Ok::<(), readable_compare::Error>(())
/// ```
pub struct Comparator<T: ?Sized, O = Natural> {
    policy: NullPolicy,
    order: O,
    marker: PhantomData<fn(&T, &T) -> Ordering>,
}

impl<T: ?Sized> Comparator<T, Natural> {
    /// Natural order, absent operands are an error
    pub const NULL_THROW: Self = Comparator::from_parts(NullPolicy::NullThrow, Natural);

    /// Natural order, absent operands sort first
    pub const NULL_LOWER: Self = Comparator::from_parts(NullPolicy::NullLower, Natural);

    /// Natural order, absent operands sort last
    pub const NULL_HIGHER: Self = Comparator::from_parts(NullPolicy::NullHigher, Natural);

    /// Natural order, absent operands equal anything
    pub const NULL_EQUAL: Self = Comparator::from_parts(NullPolicy::NullEqual, Natural);

    /// The natural order comparator for the given policy
    ///
    /// ```
    /// use readable_compare::{Comparator, NullPolicy};
    /// let cmp = Comparator::<str>::natural(NullPolicy::NullHigher);
    /// assert_eq!(cmp.policy(), NullPolicy::NullHigher);
    /// assert!(cmp.cmp(None, Some("a")).unwrap().is_gt());
    /// ```
    pub const fn natural(policy: NullPolicy) -> Self {
        match policy {
            NullPolicy::NullThrow => Self::NULL_THROW,
            NullPolicy::NullLower => Self::NULL_LOWER,
            NullPolicy::NullHigher => Self::NULL_HIGHER,
            NullPolicy::NullEqual => Self::NULL_EQUAL,
        }
    }
}

impl<T: ?Sized, O> Comparator<T, O> {
    const fn from_parts(policy: NullPolicy, order: O) -> Self {
        Comparator {
            policy,
            order,
            marker: PhantomData,
        }
    }

    /// Create a comparator from a null policy and an order
    pub fn new(policy: NullPolicy, order: O) -> Self
    where
        O: Order<T>,
    {
        Comparator::from_parts(policy, order)
    }

    /// Create a comparator that rejects absent operands
    pub fn of(order: O) -> Self
    where
        O: Order<T>,
    {
        Comparator::new(NullPolicy::NullThrow, order)
    }

    /// Create a comparator from parts that may be missing, for instance when
    /// they are assembled from configuration.
    ///
    /// ```
    /// use readable_compare::{Comparator, ErrorKind, Natural, NullPolicy};
    ///
    /// let cmp = Comparator::<i32, _>::try_from_parts(Some(NullPolicy::NullLower), Some(Natural));
    /// assert!(cmp.is_ok());
    ///
    /// let err = Comparator::<i32, Natural>::try_from_parts(Some(NullPolicy::NullLower), None)
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), &ErrorKind::NullConfiguration { missing: "order" });
    /// ```
    pub fn try_from_parts(policy: Option<NullPolicy>, order: Option<O>) -> Result<Self, Error>
    where
        O: Order<T>,
    {
        let policy = policy.ok_or_else(|| {
            Error::new(ErrorKind::NullConfiguration {
                missing: "null policy",
            })
        })?;
        let order =
            order.ok_or_else(|| Error::new(ErrorKind::NullConfiguration { missing: "order" }))?;
        Ok(Comparator::new(policy, order))
    }

    pub fn policy(&self) -> NullPolicy {
        self.policy
    }

    pub fn order(&self) -> &O {
        &self.order
    }
}

impl<T, F> Comparator<T, F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    /// Create a comparator from a closure. Unlike [`Comparator::new`] the
    /// closure's argument types are inferred from `T`.
    ///
    /// ```
    /// use readable_compare::{Comparator, NullPolicy};
    ///
    /// let by_len = Comparator::<str, _>::from_fn(NullPolicy::NullLower, |a, b| a.len().cmp(&b.len()));
    /// assert!(by_len.cmp(Some("abc"), Some("de")).unwrap().is_gt());
    /// ```
    pub fn from_fn(policy: NullPolicy, order: F) -> Self {
        Comparator::from_parts(policy, order)
    }
}

impl<T: ?Sized, O: Order<T>> Comparator<T, O> {
    /// Three-way compare of two operands
    pub fn cmp(&self, a: Option<&T>, b: Option<&T>) -> Result<Ordering, Error> {
        compare::cmp_any(a, b, &self.order, self.policy)
    }

    /// Compare two operands with the given operator
    pub fn compare(&self, a: Option<&T>, op: Operator, b: Option<&T>) -> Result<bool, Error> {
        compare::compare(a, op, b, &self.order, self.policy)
    }

    /// Three-way compare of two present values. The null policy never applies.
    #[inline]
    pub fn cmp_present(&self, a: &T, b: &T) -> Ordering {
        self.order.order(a, b)
    }

    /// Compare two present values with the given operator
    #[inline]
    pub fn compare_present(&self, a: &T, op: Operator, b: &T) -> bool {
        op.test(self.order.order(a, b))
    }

    /// The higher of the two operands. Ties go to the first.
    ///
    /// ```
    /// use readable_compare::Comparator;
    /// let cmp = Comparator::<i32>::NULL_HIGHER;
    /// assert_eq!(cmp.max(Some(&1), Some(&2)).unwrap(), Some(&2));
    /// assert_eq!(cmp.max(Some(&1), None).unwrap(), None);
    /// ```
    pub fn max<'a>(&self, a: Option<&'a T>, b: Option<&'a T>) -> Result<Option<&'a T>, Error> {
        let first = self.compare(a, Operator::GreaterEq, b)?;
        Ok(if first { a } else { b })
    }

    /// The lower of the two operands. Ties go to the first.
    pub fn min<'a>(&self, a: Option<&'a T>, b: Option<&'a T>) -> Result<Option<&'a T>, Error> {
        let first = self.compare(a, Operator::LessEq, b)?;
        Ok(if first { a } else { b })
    }

    /// Restrict a value to the range `[min, max]`.
    ///
    /// Defined as `max(min, min(max, value))`. No check is made that `min`
    /// does not exceed `max`: for an inverted range of present values the
    /// result is `min`.
    ///
    /// ```
    /// use readable_compare::Comparator;
    /// let cmp = Comparator::<i32>::NULL_THROW;
    /// assert_eq!(cmp.clamp(Some(&0), Some(&-5), Some(&10)).unwrap(), Some(&0));
    /// assert_eq!(cmp.clamp(Some(&0), Some(&5), Some(&10)).unwrap(), Some(&5));
    /// assert_eq!(cmp.clamp(Some(&10), Some(&5), Some(&0)).unwrap(), Some(&10));
    /// ```
    pub fn clamp<'a>(
        &self,
        min: Option<&'a T>,
        value: Option<&'a T>,
        max: Option<&'a T>,
    ) -> Result<Option<&'a T>, Error> {
        let upper = self.min(max, value)?;
        self.max(min, upper)
    }

    /// Returns if the value lies within the range with the given endpoint
    /// inclusivity
    pub fn inside(
        &self,
        bound: BoundMode,
        min: Option<&T>,
        value: Option<&T>,
        max: Option<&T>,
    ) -> Result<bool, Error> {
        Ok(self.compare(min, bound.lower_operator(), value)?
            && self.compare(value, bound.upper_operator(), max)?)
    }

    /// Returns if the value lies outside the range with the given endpoint
    /// inclusivity. Always the negation of [`Comparator::inside`].
    ///
    /// ```
    /// use readable_compare::{BoundMode, Comparator};
    /// let cmp = Comparator::<i32>::NULL_THROW;
    /// assert!(cmp.outside(BoundMode::ExcExc, Some(&0), Some(&0), Some(&10)).unwrap());
    /// assert!(!cmp.outside(BoundMode::IncExc, Some(&0), Some(&0), Some(&10)).unwrap());
    /// ```
    pub fn outside(
        &self,
        bound: BoundMode,
        min: Option<&T>,
        value: Option<&T>,
        max: Option<&T>,
    ) -> Result<bool, Error> {
        Ok(self.compare(min, bound.lower_operator().negate(), value)?
            || self.compare(value, bound.upper_operator().negate(), max)?)
    }

    /// Returns if every adjacent pair of operands is in non-descending order
    ///
    /// ```
    /// use readable_compare::Comparator;
    /// let cmp = Comparator::<i32>::NULL_LOWER;
    /// assert!(cmp.is_sorted(vec![None, Some(&1), Some(&1), Some(&4)]).unwrap());
    /// assert!(!cmp.is_sorted(vec![Some(&1), None]).unwrap());
    /// assert!(Comparator::<i32>::NULL_THROW.is_sorted(vec![Some(&1), None]).is_err());
    /// ```
    pub fn is_sorted<'a, I>(&self, operands: I) -> Result<bool, Error>
    where
        T: 'a,
        I: IntoIterator<Item = Option<&'a T>>,
    {
        let mut iter = operands.into_iter();
        let mut previous = match iter.next() {
            Some(x) => x,
            None => return Ok(true),
        };

        for current in iter {
            if self.compare(previous, Operator::Greater, current)? {
                return Ok(false);
            }
            previous = current;
        }

        Ok(true)
    }

    /// A comparator with the reverse order. Lower and higher null policies
    /// trade places so that absent operands also reverse.
    ///
    /// ```
    /// use readable_compare::{Comparator, NullPolicy};
    /// let cmp = Comparator::<i32>::NULL_LOWER.reversed();
    /// assert_eq!(cmp.policy(), NullPolicy::NullHigher);
    /// assert!(cmp.cmp(None, Some(&1)).unwrap().is_gt());
    /// assert!(cmp.cmp(Some(&2), Some(&1)).unwrap().is_lt());
    /// ```
    pub fn reversed(&self) -> Comparator<T, Reversed<O>>
    where
        O: Clone,
    {
        Comparator::new(self.policy.reversed(), Reversed(self.order.clone()))
    }

    /// A comparator that breaks ties with the secondary order and keeps the
    /// null policy
    pub fn then_comparing<S>(&self, secondary: S) -> Comparator<T, ThenComparing<O, S>>
    where
        O: Clone,
        S: Order<T>,
    {
        self.then_comparing_with(self.policy, secondary)
    }

    /// A comparator that breaks ties with the secondary order under a
    /// different null policy
    pub fn then_comparing_with<S>(
        &self,
        policy: NullPolicy,
        secondary: S,
    ) -> Comparator<T, ThenComparing<O, S>>
    where
        O: Clone,
        S: Order<T>,
    {
        Comparator::new(policy, ThenComparing::new(self.order.clone(), secondary))
    }

    /// A comparator that breaks ties with the natural order of an extracted
    /// key
    ///
    /// ```
    /// use readable_compare::{by_key, Comparator, NullPolicy};
    /// let cmp = Comparator::<(i32, i32), _>::new(NullPolicy::NullThrow, by_key(|x: &(i32, i32)| x.0))
    ///     .then_comparing_by_key(|x: &(i32, i32)| x.1);
    /// assert!(cmp.cmp(Some(&(1, 9)), Some(&(1, 2))).unwrap().is_gt());
    /// ```
    pub fn then_comparing_by_key<F, K>(&self, key: F) -> Comparator<T, ThenComparing<O, ByKey<F>>>
    where
        O: Clone,
        F: Fn(&T) -> K,
        K: Ord,
    {
        self.then_comparing(crate::by_key::<T, F, K>(key))
    }
}

impl<T: ?Sized, O: Clone> Clone for Comparator<T, O> {
    fn clone(&self) -> Self {
        Comparator::from_parts(self.policy, self.order.clone())
    }
}

impl<T: ?Sized, O: Copy> Copy for Comparator<T, O> {}

impl<T: ?Sized, O: fmt::Debug> fmt::Debug for Comparator<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("policy", &self.policy)
            .field("order", &self.order)
            .finish()
    }
}

impl<T: ?Sized> Default for Comparator<T, Natural> {
    fn default() -> Self {
        Self::NULL_THROW
    }
}
