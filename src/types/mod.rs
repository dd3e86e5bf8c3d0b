pub mod lc;
