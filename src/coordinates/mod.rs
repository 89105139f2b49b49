//! Coordinate representations and the cylindrical vector algebra

pub mod cartesian;
pub mod cylindrical;
pub mod vectorized;

pub use cartesian::Cartesian3;
pub use cylindrical::{
    cartesian_to_cylindrical, cylindrical_add, cylindrical_cross, cylindrical_inner,
    cylindrical_to_cartesian, Cylindrical3,
};
