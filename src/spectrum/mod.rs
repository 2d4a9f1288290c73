pub mod dft;
pub mod path;
