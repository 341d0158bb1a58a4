pub mod error;
pub mod grid2;
pub mod grid3;
pub mod index;

pub mod prelude {
    pub use nalgebra::Point2;

    pub use nalgebra::Point3;

    pub use crate::error::OutOfBounds;
    pub use crate::grid2::Grid2;
    pub use crate::grid3::Grid3;
    pub use crate::index::{Index2, Index3};
}
