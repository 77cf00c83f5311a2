/*!

Readable pairwise comparisons that name the operator and the null handling
policy at the call site.

Instead of inspecting the sign of a three-way compare, a check reads as a
single expression: `compare(a, Operator::LessEq, b)`. Operands are
`Option<&T>` and what happens when one is absent is decided by an explicit
[`NullPolicy`].

## Features

- ✔ Explicit: six [`Operator`]s mapped onto the three-way result
- ✔ Null aware: absent operands sort lower, higher, equal, or are an error
- ✔ Composable: reverse and chain orders with the null policy following along
- ✔ Ranges: `min`, `max`, `clamp`, `inside` and `outside` with [`BoundMode`] inclusivity
- ✔ Small: no required dependencies, comparators are immutable `Copy` values

## Quick Start

```rust
use readable_compare::{BoundMode, Comparator, NullPolicy, Operator};

let cmp = Comparator::<i32>::natural(NullPolicy::NullLower);

assert!(cmp.compare(Some(&3), Operator::Less, Some(&5))?);
assert!(cmp.compare(None, Operator::Less, Some(&0))?);
assert_eq!(cmp.clamp(Some(&0), Some(&-5), Some(&10))?, Some(&0));
assert!(cmp.outside(BoundMode::ExcExc, Some(&0), Some(&0), Some(&10))?);

// Reversing also flips where absent operands land
let rev = cmp.reversed();
assert!(rev.cmp(None, Some(&1))?.is_gt());
# Ok::<(), readable_compare::Error>(())
```

## Custom Orders

Any `Fn(&T, &T) -> Ordering` is an [`Order`]. Orders can be reversed and
chained, either directly or through a [`Comparator`].

```rust
use readable_compare::{by_key, Comparator, NullPolicy, Operator};

#[derive(Debug)]
struct Version {
    major: u32,
    minor: u32,
}

let cmp = Comparator::<Version, _>::new(NullPolicy::NullThrow, by_key(|v: &Version| v.major))
    .then_comparing_by_key(|v: &Version| v.minor);

let old = Version { major: 1, minor: 9 };
let new = Version { major: 1, minor: 10 };
assert!(cmp.compare(Some(&old), Operator::Less, Some(&new))?);
assert!(cmp.compare(None, Operator::Less, Some(&new)).is_err());
# Ok::<(), readable_compare::Error>(())
```

## One Level Lower

The comparator is a thin layer over the stateless functions in [`compare`],
which take the order and the policy as arguments. For the natural order with
a lenient policy there are infallible shortcuts:

```rust
use readable_compare::{cmp_null_higher, compare_null_equal, Operator};

let mut data = vec![Some("b"), None, Some("a")];
data.sort_by(|a, b| cmp_null_higher(a.as_deref(), b.as_deref()));
assert_eq!(data, vec![Some("a"), Some("b"), None]);

assert!(compare_null_equal(None, Operator::GreaterEq, Some(&10)));
```

*/

mod bound;
pub mod compare;
mod comparator;
mod errors;
mod null;
mod operator;
mod order;

pub use self::bound::BoundMode;
pub use self::compare::{
    cmp_null_equal, cmp_null_higher, cmp_null_lower, compare_null_equal, compare_null_higher,
    compare_null_lower,
};
pub use self::comparator::Comparator;
pub use self::errors::*;
pub use self::null::NullPolicy;
pub use self::operator::{three_way_from_sign, Operator};
pub use self::order::{by_key, ByKey, Natural, Order, Reversed, ThenComparing};
