pub mod primitives;
pub mod simulate;
