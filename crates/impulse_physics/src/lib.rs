mod error;
mod particle;
mod vector;

pub use self::{error::*, particle::*, vector::*};

/// Scalar type used by every physics quantity.
pub type Real = f64;
