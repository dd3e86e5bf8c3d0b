use std::ops::{Add, AddAssign};
use num_traits::Zero;
use crate::Elem;

// Additive monoids

pub trait AddMonOps<T = Self>:
    Sized +
    Add<T, Output = T> +              // S + T -> T
    for<'a> Add<&'a T, Output = T>    // S + &T -> T
{}

pub trait AddMon:
    Elem +
    AddMonOps +                       // T + T -> T, T + &T -> T
    AddAssign +                       // T += T
    for<'a> AddAssign<&'a Self> +     // T += &T
    Zero
where
    for<'a> &'a Self: AddMonOps<Self> // &T + T -> T, &T + &T -> T
{
    fn sum<T, I>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        Self: AddAssign<T>
    {
        itr.into_iter().fold(Self::zero(), |mut res, a| {
            res += a;
            res
        })
    }
}
