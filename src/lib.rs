pub mod extrema;
pub mod scan;
pub mod source;
