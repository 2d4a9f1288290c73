pub mod surface;
pub mod svg;
