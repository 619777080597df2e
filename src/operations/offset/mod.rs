mod offset_poly;

pub use offset_poly::OffsetPoly;
