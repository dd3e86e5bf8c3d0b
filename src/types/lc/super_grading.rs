use crate::{Parity, Ring, RingOps};
use super::{GradedGen, GradingError, Lc};

// A basis element of a super module, i.e. one carrying a Z/2-degree.
//
// The default derives the parity from `deg`. Structures whose Z/2-grading
// is not the mod-2 reduction of their Z-grading must override `parity`.
pub trait SuperGen: GradedGen {
    fn parity(&self) -> Parity {
        Parity::from_deg(self.deg() as i64)
    }
}

impl<X, R> Lc<X, R>
where
    X: SuperGen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    pub fn is_super_homogeneous(&self) -> bool {
        let mut parity = None;
        for x in self.gens() {
            match parity {
                None => parity = Some(x.parity()),
                Some(p) => if p != x.parity() {
                    return false
                }
            }
        }
        true
    }

    pub fn parity(&self) -> Result<Parity, GradingError> {
        let Some((x, _)) = self.leading_term() else {
            return Err(GradingError::ZeroElement)
        };
        if !self.is_super_homogeneous() {
            return Err(GradingError::NotHomogeneous)
        }
        Ok(x.parity())
    }

    pub fn parity_component(&self, p: Parity) -> Self {
        self.filter_gens(|x| x.parity() == p)
    }

    pub fn even_component(&self) -> Self {
        self.parity_component(Parity::Even)
    }

    pub fn odd_component(&self) -> Self {
        self.parity_component(Parity::Odd)
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Mul;
    use derive_more::Display;
    use num_traits::Zero;
    use crate::{Elem, Parity};
    use crate::lc::{Gen, GradedGen, GradingError, Lc, SuperGen};

    // monomials t^i, with parity induced by the degree.
    #[derive(Debug, Display, Default, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
    #[display("t{}", _0)]
    struct T(isize);

    impl Mul for T {
        type Output = T;
        fn mul(self, rhs: T) -> T {
            T(self.0 + rhs.0)
        }
    }

    impl Elem for T {
        fn math_symbol() -> String {
            String::from("T")
        }
    }

    impl Gen for T {}

    impl GradedGen for T {
        fn deg(&self) -> isize {
            self.0
        }
    }

    impl SuperGen for T {}

    type L = Lc<T, i32>;

    fn t(i: isize) -> T {
        T(i)
    }

    #[test]
    fn gen_parity() {
        assert_eq!(t(0).parity(), Parity::Even);
        assert_eq!(t(1).parity(), Parity::Odd);
        assert_eq!(t(2).parity(), Parity::Even);
        assert_eq!(t(-1).parity(), Parity::Odd);
    }

    #[test]
    fn is_super_homogeneous() {
        let z = L::zero();
        assert!(z.is_super_homogeneous());

        let z = L::from_iter([(t(1), 1), (t(3), -3)]);
        assert!(z.is_super_homogeneous());

        let z = L::from_iter([(t(0), 4), (t(2), 1)]);
        assert!(z.is_super_homogeneous());

        let z = L::from_iter([(t(0), 4), (t(1), 1), (t(2), 1)]);
        assert!(!z.is_super_homogeneous());
    }

    #[test]
    fn super_homogeneous_vs_homogeneous() {
        // t0 + t2 is homogeneous for the Z/2-grading but not for the Z-grading.
        let z = L::from_iter([(t(0), 4), (t(2), 1)]);
        assert!( z.is_super_homogeneous());
        assert!(!z.is_homogeneous());
    }

    #[test]
    fn parity() {
        let z = L::zero();
        assert_eq!(z.parity(), Err(GradingError::ZeroElement));

        let z = L::from_iter([(t(0), 4), (t(1), 1)]);
        assert_eq!(z.parity(), Err(GradingError::NotHomogeneous));

        let z = L::from_iter([(t(1), 1), (t(3), -3)]);
        assert_eq!(z.parity(), Ok(Parity::Odd));

        let z = L::from_iter([(t(0), 4), (t(2), 1)]);
        assert_eq!(z.parity(), Ok(Parity::Even));
    }

    #[test]
    fn parity_of_product_of_odd_gens() {
        let x = L::from(t(1));
        let xx = &x * &x;

        assert_eq!(xx, L::from(t(2)));
        assert_eq!(xx.parity(), Ok(Parity::Even));
        assert_eq!(xx.even_component(), xx);
        assert!(xx.odd_component().is_zero());
    }

    #[test]
    fn components() {
        let z = L::from_iter([(t(0), 4), (t(1), 1), (t(2), 1), (t(3), -3)]);

        let even = z.even_component();
        let odd  = z.odd_component();

        assert_eq!(even, L::from_iter([(t(0), 4), (t(2), 1)]));
        assert_eq!(odd,  L::from_iter([(t(1), 1), (t(3), -3)]));
        assert_eq!(even + odd, z);
    }

    #[test]
    fn components_of_zero() {
        let z = L::zero();

        assert!(z.even_component().is_zero());
        assert!(z.odd_component().is_zero());
        assert_eq!(z.even_component(), L::zero());
        assert_eq!(z.odd_component(), L::zero());
    }

    #[test]
    fn component_idempotence() {
        let z = L::from_iter([(t(0), 4), (t(2), 1)]);
        assert_eq!(z.even_component(), z);
        assert!(z.odd_component().is_zero());

        let w = L::from_iter([(t(1), 1), (t(3), -3)]);
        assert_eq!(w.odd_component(), w);
        assert!(w.even_component().is_zero());
    }

    #[test]
    fn parity_component() {
        let z = L::from_iter([(t(0), 4), (t(1), 1)]);

        assert_eq!(z.parity_component(Parity::Even), z.even_component());
        assert_eq!(z.parity_component(Parity::Odd),  z.odd_component());
    }

    // generators k_i sitting in degree 2i, with parity i mod 2.
    // the Z/2-grading is deliberately not the mod-2 reduction of the degree.
    #[derive(Debug, Display, Default, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
    #[display("k{}", _0)]
    struct K(isize);

    impl Elem for K {
        fn math_symbol() -> String {
            String::from("K")
        }
    }

    impl Gen for K {}

    impl GradedGen for K {
        fn deg(&self) -> isize {
            2 * self.0
        }
    }

    impl SuperGen for K {
        fn parity(&self) -> Parity {
            Parity::from_deg(self.0 as i64)
        }
    }

    type M = Lc<K, i32>;

    fn k(i: isize) -> K {
        K(i)
    }

    #[test]
    fn overridden_parity() {
        assert_eq!(k(1).deg(), 2);
        assert_eq!(k(1).parity(), Parity::Odd);
        assert_eq!(k(2).parity(), Parity::Even);
    }

    #[test]
    fn overridden_parity_ops() {
        let z = M::from_iter([(k(1), 1), (k(3), 1)]);
        assert!(z.is_super_homogeneous());
        assert_eq!(z.parity(), Ok(Parity::Odd));

        let z = M::from_iter([(k(1), 1), (k(2), 1)]);
        assert!(!z.is_super_homogeneous());
        assert_eq!(z.parity(), Err(GradingError::NotHomogeneous));

        assert_eq!(z.even_component(), M::from((k(2), 1)));
        assert_eq!(z.odd_component(),  M::from((k(1), 1)));
        assert_eq!(z.even_component() + z.odd_component(), z);
    }
}
