use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use num::traits::WrappingAdd;

use crate::error::SegmentTreeError;

pub trait Magma {
    type Elem: Clone;

    fn add(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

pub trait Associativity: Magma {}
pub trait Commutativity: Magma {}
pub trait Identity: Magma {
    /// Identity, the result of combining over an empty range.
    fn id(&self) -> Self::Elem;
}

pub trait Monoid: Magma + Associativity + Identity {}
impl<M: Magma + Associativity + Identity> Monoid for M {}

pub trait CommutativeMonoid: Monoid + Commutativity {}
impl<CM: Monoid + Commutativity> CommutativeMonoid for CM {}

macro_rules! marker_monoid {
    ($name:ident, $label:literal) => {
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T>(PhantomData<T>);

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> $name<T> {
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($label)
            }
        }
    };
}

marker_monoid!(Sum, "sum");
marker_monoid!(Min, "min");
marker_monoid!(Max, "max");

impl<T: num::Num + WrappingAdd + Clone> Magma for Sum<T> {
    type Elem = T;

    /// Wraps on overflow in every build profile.
    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs.wrapping_add(&rhs)
    }
}
impl<T: num::Num + WrappingAdd + Clone> Identity for Sum<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }
}
impl<T: num::Num + WrappingAdd + Clone> Associativity for Sum<T> {}
impl<T: num::Num + WrappingAdd + Clone> Commutativity for Sum<T> {}

impl<T: num::Bounded + Ord + Clone> Magma for Min<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        std::cmp::min(lhs, rhs)
    }
}
impl<T: num::Bounded + Ord + Clone> Identity for Min<T> {
    /// The largest representable value stands in for +infinity.
    #[inline]
    fn id(&self) -> T {
        T::max_value()
    }
}
impl<T: num::Bounded + Ord + Clone> Associativity for Min<T> {}
impl<T: num::Bounded + Ord + Clone> Commutativity for Min<T> {}

impl<T: num::Bounded + Ord + Clone> Magma for Max<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        std::cmp::max(lhs, rhs)
    }
}
impl<T: num::Bounded + Ord + Clone> Identity for Max<T> {
    /// The smallest representable value stands in for -infinity.
    #[inline]
    fn id(&self) -> T {
        T::min_value()
    }
}
impl<T: num::Bounded + Ord + Clone> Associativity for Max<T> {}
impl<T: num::Bounded + Ord + Clone> Commutativity for Max<T> {}

/// Combining operation over `i64` chosen at runtime.
///
/// Each tag carries both its combine function and its identity, so a tree
/// built with an `Operation` behaves exactly like one built with the matching
/// [`Sum`], [`Min`] or [`Max`] marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Sum,
    Min,
    Max,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Sum, Operation::Min, Operation::Max];

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Min => "min",
            Operation::Max => "max",
        }
    }
}

impl Magma for Operation {
    type Elem = i64;

    #[inline]
    fn add(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operation::Sum => Sum::<i64>::new().add(lhs, rhs),
            Operation::Min => Min::<i64>::new().add(lhs, rhs),
            Operation::Max => Max::<i64>::new().add(lhs, rhs),
        }
    }
}
impl Identity for Operation {
    #[inline]
    fn id(&self) -> i64 {
        match self {
            Operation::Sum => Sum::<i64>::new().id(),
            Operation::Min => Min::<i64>::new().id(),
            Operation::Max => Max::<i64>::new().id(),
        }
    }
}
impl Associativity for Operation {}
impl Commutativity for Operation {}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = SegmentTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SegmentTreeError::UnknownOperation(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn identities_are_neutral() {
        for op in Operation::ALL {
            for x in [i64::MIN, -7, 0, 42, i64::MAX] {
                assert_eq!(op.add(op.id(), x), x, "{} identity", op);
                assert_eq!(op.add(x, op.id()), x, "{} identity", op);
            }
        }
    }

    #[test]
    fn operation_matches_markers() {
        assert_eq!(Operation::Sum.add(3, -5), Sum::<i64>::new().add(3, -5));
        assert_eq!(Operation::Min.add(3, -5), -5);
        assert_eq!(Operation::Max.add(3, -5), 3);
        assert_eq!(Operation::Min.id(), i64::MAX);
        assert_eq!(Operation::Max.id(), i64::MIN);
        assert_eq!(Operation::Sum.id(), 0);
    }

    #[test]
    fn parse_operation() {
        assert_eq!("sum".parse::<Operation>(), Ok(Operation::Sum));
        assert_eq!(" MIN ".parse::<Operation>(), Ok(Operation::Min));
        assert_eq!("Max".parse::<Operation>(), Ok(Operation::Max));
        assert_eq!(
            "product".parse::<Operation>(),
            Err(SegmentTreeError::UnknownOperation("product".to_owned()))
        );
        assert!("".parse::<Operation>().is_err());
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn sum_wraps_on_overflow() {
        assert_eq!(Sum::<i64>::new().add(i64::MAX, 1), i64::MIN);
        assert_eq!(Operation::Sum.add(i64::MIN, -1), i64::MAX);
        assert_eq!(Operation::Sum.add(i64::MAX, i64::MAX), -2);
    }

    #[test]
    fn ordered_float_bounds() {
        let min = Min::<OrderedFloat<f64>>::new();
        let max = Max::<OrderedFloat<f64>>::new();
        assert_eq!(min.add(min.id(), OrderedFloat(1.5)), OrderedFloat(1.5));
        assert_eq!(max.add(max.id(), OrderedFloat(-1.5)), OrderedFloat(-1.5));
    }
}
