//! Integration with `rand` (v0.8) crate.

use super::{RandSource, V4Generator};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    /// Returns the low 16 bits of [`RngCore::next_u32()`]; the upper half is discarded.
    fn next_u16(&mut self) -> u16 {
        self.0.next_u32() as u16
    }
}

impl<T: RngCore> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
