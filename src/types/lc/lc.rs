use std::collections::HashMap;
use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign, Mul, MulAssign};
use ahash::AHashMap;
use itertools::Itertools;
use num_traits::Zero;
use auto_impl_ops::auto_ops;
use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Ring, RingOps, RMod, RModOps};

use super::gen::*;

// A linear combination of basis elements `X` with coefficients in `R`,
// stored sparsely. Zero coefficients are never retained.
#[derive(PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    data: AHashMap<X, R>,
    #[cfg_attr(feature = "serde", serde(skip))]
    r_zero: R
}

impl<X, R> Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    pub fn new() -> Self {
        let hasher = ahash::RandomState::with_seeds(0, 0, 0, 0);
        let data = AHashMap::with_hasher(hasher);
        let r_zero = R::zero();
        Self { data, r_zero }
    }

    pub fn clean(&mut self) {
        self.data.retain(|_, r| !r.is_zero());
    }

    pub fn nterms(&self) -> usize {
        self.data.len()
    }

    pub fn any_term(&self) -> Option<(&X, &R)> {
        self.iter().next()
    }

    // the term whose basis element is maximal w.r.t. the order on `X`.
    pub fn leading_term(&self) -> Option<(&X, &R)> {
        self.iter().max_by(|(x, _), (y, _)| x.cmp(y))
    }

    pub fn gens(&self) -> impl Iterator<Item = &X> {
        self.data.keys()
    }

    pub fn coeff(&self, x: &X) -> &R {
        self.data.get(x).unwrap_or(&self.r_zero)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&X, &R)> {
        self.data.iter()
    }

    pub fn map_coeffs<S, F>(&self, f: F) -> Lc<X, S>
    where
        S: Ring, for<'x> &'x S: RingOps<S>,
        F: Fn(&R) -> S
    {
        self.iter().map(|(x, r)| (x.clone(), f(r))).collect()
    }

    pub fn into_map_coeffs<S, F>(self, f: F) -> Lc<X, S>
    where
        S: Ring, for<'x> &'x S: RingOps<S>,
        F: Fn(R) -> S
    {
        self.into_iter().map(|(x, r)| (x, f(r))).collect()
    }

    pub fn filter_gens<F>(&self, f: F) -> Self
    where F: Fn(&X) -> bool {
        self.iter().filter_map(|(x, a)|
            if f(x) {
                Some((x.clone(), a.clone()))
            } else {
                None
            }
        ).collect()
    }

    pub fn fmt(&self, f: &mut std::fmt::Formatter<'_>, ascending: bool) -> std::fmt::Result {
        use crate::util::format::paren_expr;

        if self.data.is_empty() {
            return write!(f, "0");
        }

        let mut elements = self.iter().sorted_by(|(x, _), (y, _)|
            if ascending {
                x.cmp(y)
            } else {
                x.cmp(y).reverse()
            }
        );

        if let Some((x, r)) = elements.next() {
            let r = paren_expr(r);
            let x = x.to_string();

            if r == "1" {
                write!(f, "{x}")?
            } else if r == "-1" {
                write!(f, "-{x}")?
            } else if x == "1" {
                write!(f, "{r}")?
            } else {
                write!(f, "{r}{x}")?
            };
        };

        for (x, r) in elements {
            let r = paren_expr(r);
            let x = x.to_string();

            let (op, r) = if let Some(r) = r.strip_prefix('-') {
                ("-", r)
            } else {
                ("+", r.as_str())
            };

            if r == "1" {
                write!(f, " {op} {x}")?
            } else if x == "1" {
                write!(f, " {op} {r}")?
            } else {
                write!(f, " {op} {r}{x}")?
            };
        }

        Ok(())
    }
}

impl<X, R> From<X> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from(x: X) -> Self {
        Self::from((x, R::one()))
    }
}

impl<X, R> From<(X, R)> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from(value: (X, R)) -> Self {
        Self::from_iter([value])
    }
}

impl<X, R> From<HashMap<X, R>> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from(value: HashMap<X, R>) -> Self {
        Self::from_iter(value)
    }
}

impl<X, R> FromIterator<(X, R)> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from_iter<T: IntoIterator<Item = (X, R)>>(iter: T) -> Self {
        let mut res = Self::new();
        for e in iter.into_iter() {
            res.add_pair(e);
        }
        res.clean();
        res
    }
}

impl<X, R> IntoIterator for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Item = (X, R);
    type IntoIter = std::collections::hash_map::IntoIter<X, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<X, R> Display for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt(f, true)
    }
}

impl<X, R> Debug for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt(f, true)
    }
}

impl<X, R> Zero for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl<X, R> Neg for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.into_map_coeffs(|r| -r)
    }
}

impl<X, R> Neg for &Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Output = Lc<X, R>;

    fn neg(self) -> Self::Output {
        self.map_coeffs(|r| -r)
    }
}

impl<X, R> Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    // must clean after call
    pub fn add_pair(&mut self, rhs: (X, R)) {
        let (x, r) = rhs;
        if r.is_zero() { return }

        if self.data.contains_key(&x) {
            let v = self.data.get_mut(&x).unwrap();
            v.add_assign(r);
        } else {
            self.data.insert(x, r);
        }
    }

    // must clean after call
    pub fn add_pair_ref(&mut self, rhs: (&X, &R)) {
        let (x, r) = rhs;
        if r.is_zero() { return }

        if self.data.contains_key(x) {
            let v = self.data.get_mut(x).unwrap();
            v.add_assign(r);
        } else {
            self.data.insert(x.clone(), r.clone());
        }
    }
}

#[auto_ops]
impl<X, R> AddAssign<&Lc<X, R>> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn add_assign(&mut self, rhs: &Self) {
        for e in rhs.data.iter() {
            self.add_pair_ref(e);
        }
        self.clean()
    }
}

#[auto_ops]
impl<X, R> SubAssign<&Lc<X, R>> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn sub_assign(&mut self, rhs: &Self) {
        for e in rhs.data.iter() {
            self.add_pair_ref((e.0, &-e.1));
        }
        self.clean()
    }
}

#[auto_ops]
impl<X, R> MulAssign<&R> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn mul_assign(&mut self, rhs: &R) {
        let data = std::mem::take(&mut self.data);
        self.data = data.into_iter().map(|(x, r)| (x, &r * rhs)).collect();
        self.clean()
    }
}

#[auto_ops]
impl<X, R> Mul for &Lc<X, R>
where
    X: Gen + Mul<Output = X>,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Output = Lc<X, R>;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut res = Self::Output::zero();
        res.data.reserve(self.nterms() * rhs.nterms());

        for (x, r) in self.iter() {
            for (y, s) in rhs.iter() {
                let xy = x.clone() * y.clone();
                let rs = r * s;
                res.add_pair((xy, rs));
            }
        }

        res.clean();
        res
    }
}

macro_rules! impl_alg_ops {
    ($trait:ident) => {
        impl<X, R> $trait<Self> for Lc<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

        impl<X, R> $trait<Lc<X, R>> for &Lc<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}
    };
}

impl_alg_ops!(AddMonOps);
impl_alg_ops!(AddGrpOps);

impl<X, R> Elem for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn math_symbol() -> String {
        format!("{}<{}>", R::math_symbol(), X::math_symbol())
    }
}

impl<X, R> AddMon for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> AddGrp for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> RModOps<R, Self> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> RModOps<R, Lc<X, R>> for &Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> RMod for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type R = R;
}
