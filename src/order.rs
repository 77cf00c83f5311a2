use std::cmp::Ordering;

/// A total order over present values.
///
/// Only the [`Ordering`] returned matters. Implementations must be
/// deterministic for the duration of a comparison. Any
/// `Fn(&T, &T) -> Ordering` is an order.
///
/// ```
/// use readable_compare::{Natural, Order, Reversed, ThenComparing};
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.order(&"ab", &"c"), Ordering::Greater);
/// assert_eq!(ThenComparing::new(by_len, Natural).order(&"b", &"a"), Ordering::Greater);
/// assert_eq!(Reversed(Natural).order(&1, &2), Ordering::Greater);
/// ```
pub trait Order<T: ?Sized> {
    /// Compare two present values
    fn order(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Order<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn order(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The intrinsic order of a type as given by [`Ord`]
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Order<T> for Natural {
    #[inline]
    fn order(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of the wrapped order
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: Order<T>> Order<T> for Reversed<O> {
    #[inline]
    fn order(&self, a: &T, b: &T) -> Ordering {
        self.0.order(b, a)
    }
}

/// Two orders run one after the other: the secondary only decides what the
/// primary considers equal.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct ThenComparing<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> ThenComparing<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        ThenComparing { primary, secondary }
    }

    pub fn primary(&self) -> &A {
        &self.primary
    }

    pub fn secondary(&self) -> &B {
        &self.secondary
    }
}

impl<T: ?Sized, A: Order<T>, B: Order<T>> Order<T> for ThenComparing<A, B> {
    #[inline]
    fn order(&self, a: &T, b: &T) -> Ordering {
        match self.primary.order(a, b) {
            Ordering::Equal => self.secondary.order(a, b),
            x => x,
        }
    }
}

/// Orders values by the natural order of a key extracted from them
#[derive(Debug, Copy, Clone)]
pub struct ByKey<F>(F);

impl<T, F, K> Order<T> for ByKey<F>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn order(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Create an order that compares the keys extracted from each value
///
/// ```
/// use readable_compare::{by_key, Order, ThenComparing};
/// use std::cmp::Ordering;
///
/// let by_first = by_key(|x: &(i32, i32)| x.0);
/// assert_eq!(by_first.order(&(1, 9), &(1, 2)), Ordering::Equal);
///
/// let chained = ThenComparing::new(by_first, by_key(|x: &(i32, i32)| x.1));
/// assert_eq!(chained.order(&(1, 9), &(1, 2)), Ordering::Greater);
/// ```
pub fn by_key<T, F, K>(key: F) -> ByKey<F>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Ord,
{
    ByKey(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn sign(x: Ordering) -> i32 {
        x as i32
    }

    #[test]
    fn test_natural_order() {
        assert_eq!(Natural.order(&3, &5), Ordering::Less);
        assert_eq!(Natural.order("b", "a"), Ordering::Greater);
        assert_eq!(Natural.order(&[1, 2][..], &[1, 2][..]), Ordering::Equal);
    }

    #[test]
    fn test_closure_order() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.order(&-3, &2), Ordering::Greater);
        assert_eq!(Reversed(by_abs).order(&-3, &2), Ordering::Less);
    }

    #[test]
    fn test_then_comparing_only_breaks_ties() {
        let by_first = by_key(|x: &(i32, i32)| x.0);
        let chained = ThenComparing::new(by_first, Reversed(Natural));
        assert_eq!(chained.order(&(0, 0), &(1, 9)), Ordering::Less);
        assert_eq!(chained.order(&(1, 9), &(1, 2)), Ordering::Less);
        assert_eq!(chained.order(&(1, 2), &(1, 2)), Ordering::Equal);
    }

    #[quickcheck]
    fn reversed_is_antisymmetric(a: i64, b: i64) -> bool {
        sign(Reversed(Natural).order(&a, &b)) == -sign(Natural.order(&a, &b))
    }

    #[quickcheck]
    fn double_reverse_is_identity(a: String, b: String) -> bool {
        Reversed(Reversed(Natural)).order(&a, &b) == a.cmp(&b)
    }

    #[quickcheck]
    fn chained_tie_break(a: (u8, u8), b: (u8, u8)) -> bool {
        let primary = by_key(|x: &(u8, u8)| x.0);
        let secondary = by_key(|x: &(u8, u8)| x.1);
        let expected = match primary.order(&a, &b) {
            Ordering::Equal => secondary.order(&a, &b),
            x => x,
        };
        ThenComparing::new(primary, secondary).order(&a, &b) == expected
    }
}
