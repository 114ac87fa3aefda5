use crate::core::types::{Channel, Number};
use crate::shared::math::Lerp;
use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;
use std::array;
use std::ops::{Deref, DerefMut, Index, IndexMut};

#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
#[repr(transparent)]
pub struct Colour<const N: usize>(pub [Channel; N]);

pub type ColourRgb = Colour<3>;
/// An RGB colour with a trailing alpha channel, as handed back to the renderer
pub type ColourRgba = Colour<4>;

impl<const N: usize> Colour<N> {
    /// How many channels there are, for this colour.
    /// RGB is 3 channels.
    pub const CHANNEL_COUNT: usize = N;
}

impl<const N: usize> Default for Colour<N> {
    fn default() -> Self { Self::new([0.; N]) }
}

// region Constructors

impl<const N: usize> Colour<N> {
    pub const fn new(val: [Channel; N]) -> Self { Self(val) }
}

// endregion Constructors

// region RGB(A) Impl

impl From<(Channel, Channel, Channel)> for ColourRgb {
    fn from((r, g, b): (Channel, Channel, Channel)) -> Self { Self::new([r, g, b]) }
}

impl ColourRgb {
    /// Appends an alpha channel to the colour
    pub const fn with_alpha(self, alpha: Channel) -> ColourRgba {
        let [r, g, b] = self.0;
        Colour([r, g, b, alpha])
    }

    /// Same as [Self::with_alpha], with a fully opaque alpha
    pub const fn opaque(self) -> ColourRgba { self.with_alpha(1.) }
}

impl ColourRgba {
    /// Strips the alpha channel
    pub const fn rgb(self) -> ColourRgb {
        let [r, g, b, _] = self.0;
        Colour([r, g, b])
    }

    pub const fn alpha(self) -> Channel { self.0[3] }
}

// endregion RGB(A) Impl

// region Known Colours

impl<const N: usize> Colour<N> {
    pub const BLACK: Self = Self::new([0.; N]);
    pub const WHITE: Self = Self::new([1.; N]);
}

impl ColourRgb {
    pub const BLUE: Self = Self::new([0., 0., 1.]);
}

// endregion Known Colours

// region To/From impls

impl<const N: usize> From<[Channel; N]> for Colour<N> {
    fn from(val: [Channel; N]) -> Self { Self::new(val) }
}

impl<const N: usize> From<Colour<N>> for [Channel; N] {
    fn from(Colour(val): Colour<N>) -> Self { val }
}

// endregion To/From impls

// region Iterating/Indexing

impl<const N: usize> IntoIterator for Colour<N> {
    type Item = Channel;
    type IntoIter = array::IntoIter<Channel, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<const N: usize> Deref for Colour<N> {
    type Target = [Channel; N];

    fn deref(&self) -> &Self::Target { &self.0 }
}
impl<const N: usize> DerefMut for Colour<N> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl<const N: usize> Index<usize> for Colour<N> {
    type Output = Channel;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}
impl<const N: usize> IndexMut<usize> for Colour<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

// endregion Iterating/Indexing

// region Operators

impl<const N: usize> Colour<N> {
    /// Maps each element of the colour with the given closure, and returns the new colour
    #[inline]
    pub fn map(&self, op: impl Fn(Channel) -> Channel) -> Self { self.0.map(op).into() }
    /// Maps each element of the colour with the given closure, with the element of another, and returns the new colour.
    #[inline]
    pub fn map2(&self, other: &Self, mut op: impl FnMut(Channel, Channel) -> Channel) -> Self {
        array::from_fn(|i| op(self[i], other[i])).into()
    }

    /// Same as [Self::map2], but acts in_place
    #[inline]
    pub fn map2_assign(&mut self, other: &Self, mut op: impl FnMut(&mut Channel, Channel)) {
        self.0.iter_mut().zip_eq(other.0).for_each(|(s, o)| op(s, o))
    }
}

/// Implements a binary operator (and its assigning version) for colours, both channel-wise against another
/// colour, and against a single scalar channel value
macro_rules! impl_colour_op {
    ($($op:ident :: $op_fn:ident, $assign:ident :: $assign_fn:ident);* $(;)?) => {$(
        impl<const N: usize> std::ops::$op for Colour<N> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self { self.map2(&rhs, <Channel as std::ops::$op>::$op_fn) }
        }

        impl<const N: usize> std::ops::$op<Channel> for Colour<N> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Channel) -> Self { self.map(|c| <Channel as std::ops::$op>::$op_fn(c, rhs)) }
        }

        impl<const N: usize> std::ops::$assign for Colour<N> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) { self.map2_assign(&rhs, <Channel as std::ops::$assign>::$assign_fn) }
        }

        impl<const N: usize> std::ops::$assign<Channel> for Colour<N> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Channel) { self.0.iter_mut().for_each(|c| <Channel as std::ops::$assign>::$assign_fn(c, rhs)) }
        }
    )*};
}

impl_colour_op! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

// endregion Operators

// region Forwarding Operations

/// Forwards per-channel functions of [Channel] onto the colour
macro_rules! forward_fn {
    ($( $fn:ident($( $arg_name:ident : $arg_type:ty ),*) );* $(;)?) => {
        impl<const N: usize> Colour<N> {$(
            pub fn $fn(&self, $( $arg_name : $arg_type ),*) -> Self { self.map(|c| c.$fn($( $arg_name ),*)) }
        )*}
    };
}

forward_fn! {
    abs();
    min(min: Channel);
    max(max: Channel);
    clamp(min: Channel, max: Channel);
    powf(f: Channel);
}

// endregion Forwarding Operations

impl<const N: usize> Lerp<Number> for Colour<N> {
    fn lerp(a: Self, b: Self, t: Number) -> Self {
        let t = t as Channel;
        a.map2(&b, |a, b| a + (b - a) * t)
    }
}

impl<const N: usize> AbsDiffEq for Colour<N> {
    type Epsilon = Channel;

    fn default_epsilon() -> Self::Epsilon { Channel::EPSILON }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Colour<N> {
    fn default_max_relative() -> Self::Epsilon { Channel::EPSILON }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
