use crate::core::colour::{ColourRgb, ColourRgba};

/// Numeric type used for colour calculations in the sky model
pub type Channel = f32;
pub type Colour = ColourRgb;
pub type Rgba = ColourRgba;
pub type Image = crate::core::image::Image<Colour>;

/// Numeric type used for most calculations in the sky model
pub type Number = f64;
pub type Vector3 = glamour::Vector3<Number>;
pub type Point2 = glamour::Point2<Number>;
