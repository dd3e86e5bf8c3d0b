use thiserror::Error;
use crate::{Ring, RingOps};
use super::{Gen, Lc};

// A basis element with a well-defined integer degree.
pub trait GradedGen: Gen {
    fn deg(&self) -> isize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GradingError {
    #[error("the zero element does not have a well-defined degree")]
    ZeroElement,

    #[error("element is not homogeneous")]
    NotHomogeneous
}

impl<X, R> Lc<X, R>
where
    X: GradedGen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    pub fn is_homogeneous(&self) -> bool {
        let mut deg = None;
        for x in self.gens() {
            match deg {
                None => deg = Some(x.deg()),
                Some(d) => if d != x.deg() {
                    return false
                }
            }
        }
        true
    }

    pub fn deg(&self) -> Result<isize, GradingError> {
        let Some((x, _)) = self.leading_term() else {
            return Err(GradingError::ZeroElement)
        };
        if !self.is_homogeneous() {
            return Err(GradingError::NotHomogeneous)
        }
        Ok(x.deg())
    }

    pub fn homogeneous_component(&self, deg: isize) -> Self {
        self.filter_gens(|x| x.deg() == deg)
    }
}
