use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign};
use derive_more::{Display, Debug};
use is_even::IsEven;
use num_traits::{One, Zero};
use auto_impl_ops::auto_ops;

use crate::Sign;

// The two-element grading group Z/2.

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Debug)]
#[cfg_attr(feature = "serde", derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr))]
#[repr(u8)]
pub enum Parity {
    #[default]
    #[display("0")]
    #[debug("0")]
    Even = 0,

    #[display("1")]
    #[debug("1")]
    Odd = 1
}

impl Parity {
    pub fn is_even(&self) -> bool {
        self == &Parity::Even
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub fn from_deg<I: IsEven>(deg: I) -> Self {
        if deg.is_even() {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    // the sign (-1)^p, as picked up when two odd elements are swapped.
    pub fn sign(&self) -> Sign {
        match self {
            Parity::Even => Sign::Pos,
            Parity::Odd  => Sign::Neg
        }
    }
}

macro_rules! impl_int_conversion {
    ($t:tt) => {
        impl From<$t> for Parity {
            fn from(value: $t) -> Self {
                match value {
                    0 => Parity::Even,
                    1 => Parity::Odd,
                    _ => panic!()
                }
            }
        }

        impl From<Parity> for $t {
            fn from(value: Parity) -> Self {
                match value {
                    Parity::Even => 0,
                    Parity::Odd  => 1
                }
            }
        }
    };
}

impl_int_conversion!(i8);
impl_int_conversion!(i16);
impl_int_conversion!(i32);
impl_int_conversion!(i64);
impl_int_conversion!(isize);

#[auto_ops]
impl<'a, 'b> Add<&'b Parity> for &'a Parity {
    type Output = Parity;
    fn add(self, rhs: &'b Parity) -> Self::Output {
        if self == rhs {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

#[auto_ops]
impl<'a, 'b> Mul<&'b Parity> for &'a Parity {
    type Output = Parity;
    fn mul(self, rhs: &'b Parity) -> Self::Output {
        if self.is_odd() && rhs.is_odd() {
            Parity::Odd
        } else {
            Parity::Even
        }
    }
}

impl Zero for Parity {
    fn zero() -> Self {
        Parity::Even
    }

    fn is_zero(&self) -> bool {
        self.is_even()
    }
}

impl One for Parity {
    fn one() -> Self {
        Parity::Odd
    }

    fn is_one(&self) -> bool {
        self.is_odd()
    }
}

impl Sum for Parity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Parity::Even, |p, q| p + q)
    }
}

impl<'a> Sum<&'a Parity> for Parity {
    fn sum<I: Iterator<Item = &'a Parity>>(iter: I) -> Self {
        iter.fold(Parity::Even, |p, q| p + q)
    }
}
