mod int_ext;
mod sign;
mod parity;

pub use int_ext::*;
pub use sign::*;
pub use parity::*;
