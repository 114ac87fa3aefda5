use crate::core::types::{Colour, Number};
use crate::shared::math::Lerp;
use derivative::Derivative;
use getset::{CopyGetters, Getters};
use std::ops::{Deref, Index};

#[derive(CopyGetters, Getters, Derivative, Clone)]
#[derivative(Debug)]
pub struct Image<Col = Colour> {
    #[get_copy = "pub"]
    width: usize,
    #[get_copy = "pub"]
    height: usize,
    #[derivative(Debug = "ignore")]
    #[get = "pub"]
    data: Box<[Col]>,
}

/// How pixel coordinates that fall outside the image are brought back inside
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EdgeMode {
    /// Coordinates are clamped to the nearest edge pixel
    #[default]
    Clamp,
    /// Coordinates wrap around to the opposite edge, like a panorama seam
    Wrap,
}

impl EdgeMode {
    /// Resolves a (possibly out-of-range) integer pixel coordinate into the range `0..max`
    fn resolve(self, val: isize, max: usize) -> usize {
        let max = max as isize;
        match self {
            Self::Clamp => val.clamp(0, max - 1) as usize,
            Self::Wrap => val.rem_euclid(max) as usize,
        }
    }
}

// region Constructors

impl<Col: Clone> Image<Col> {
    /// Creates a new image with the specified dimensions, and the given fill pixel value
    pub fn new_filled(width: usize, height: usize, fill: Col) -> Self {
        Self::new_from(width, height, vec![fill; width * height])
    }
}

impl<Col> Image<Col> {
    /// Creates an image from the image's dimensions, and a slice of pixels
    ///
    /// # Panics
    /// The length of the `data` must be equal to the number of pixels `width * height`.
    pub fn new_from(width: usize, height: usize, data: impl Into<Box<[Col]>>) -> Self {
        let data = data.into();
        assert_eq!(data.len(), width * height, "number of pixels does not match dimensions");

        Self { width, height, data }
    }

    /// Creates an image from the image's dimensions, using the given function to calculate pixel values
    pub fn from_fn(width: usize, height: usize, mut func: impl FnMut(usize, usize) -> Col) -> Self {
        let data = (0..width * height)
            .map(|i| func(i % width, i / width))
            .collect::<Box<[Col]>>();
        Self { width, height, data }
    }

    /// Whether the image contains no pixels at all (either dimension is zero)
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}

// endregion Constructors

// region From<> for crate `image`

impl From<image::DynamicImage> for Image<Colour> {
    fn from(img: image::DynamicImage) -> Self {
        // Try convert into appropriate pixel format
        let img = img.into_rgb32f();
        let (width, height) = (img.width() as usize, img.height() as usize);
        let data = img
            .into_raw()
            .chunks_exact(Colour::CHANNEL_COUNT)
            .map(|px| Colour::new([px[0], px[1], px[2]]))
            .collect::<Box<[Colour]>>();
        Self::new_from(width, height, data)
    }
}

// endregion From<> for crate `image`

// region Pixel Accessors

impl<Col> Index<(usize, usize)> for Image<Col> {
    type Output = Col;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.width && y < self.height,
            "invalid pixel index ({}, {}) for dims ({},{})",
            x,
            y,
            self.width,
            self.height
        );
        &self.data[x + (y * self.width)]
    }
}

impl<Col: Copy> Image<Col> {
    /// Gets the pixel nearest to the given (continuous) pixel coordinates
    pub fn get_nearest(&self, px: Number, py: Number, [edge_x, edge_y]: [EdgeMode; 2]) -> Col {
        let x = edge_x.resolve(px.floor() as isize, self.width);
        let y = edge_y.resolve(py.floor() as isize, self.height);
        self[(x, y)]
    }

    /// Bilinearly interpolates between the four pixels surrounding the given pixel coordinates.
    ///
    /// Pixel centres lie on half-integer coordinates, so `(0.5, 0.5)` is exactly the first pixel.
    pub fn get_bilinear(&self, px: Number, py: Number, [edge_x, edge_y]: [EdgeMode; 2]) -> Col
    where
        Col: Lerp<Number>,
    {
        let (x1, x2, xl) = Self::bilinear_coords(px, self.width, edge_x);
        let (y1, y2, yl) = Self::bilinear_coords(py, self.height, edge_y);
        let [c11, c12, c21, c22] = [(x1, y1), (x1, y2), (x2, y1), (x2, y2)].map(|c| self[c]);

        // Interpolate over x-axis
        let cy1 = Col::lerp(c11, c21, xl);
        let cy2 = Col::lerp(c12, c22, xl);

        Col::lerp(cy1, cy2, yl)
    }

    fn bilinear_coords(val: Number, max: usize, edge: EdgeMode) -> (usize, usize, Number) {
        let centred = val - 0.5;
        let floor = centred.floor();
        let frac = centred - floor;
        let floor = floor as isize;

        (edge.resolve(floor, max), edge.resolve(floor + 1, max), frac)
    }
}

// endregion Pixel Accessors

// region Deref

impl<Col> Deref for Image<Col> {
    type Target = [Col];

    fn deref(&self) -> &Self::Target { self.data.deref() }
}

// endregion Deref
