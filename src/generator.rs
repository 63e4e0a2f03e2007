//! UUIDv4 generator and related types.

use crate::Uuid;

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`V4Generator`].
///
/// The source does not need to be cryptographically strong.
pub trait RandSource {
    /// Returns the next random `u16`.
    fn next_u16(&mut self) -> u16;
}

/// Represents a UUIDv4 generator that draws its random bits from an injected [`RandSource`].
///
/// Use this type to control where the entropy comes from, e.g. a seeded source in tests. The
/// [`uuid4()`](crate::uuid4) function offers a ready-made process-wide instance instead.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use uuid45::V4Generator;
///
/// let mut g = V4Generator::with_rand08(ChaCha8Rng::seed_from_u64(42));
/// let mut h = V4Generator::with_rand08(ChaCha8Rng::seed_from_u64(42));
/// assert_eq!(g.generate(), h.generate());
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// The 128 bits are drawn as eight 16-bit chunks, then the version nibble is set at `0100`
    /// and the variant bits at `10`. The remaining 122 bits are left as drawn.
    pub fn generate(&mut self) -> Uuid {
        let r = &mut self.rng;
        let time_low = (r.next_u16() as u32) << 16 | r.next_u16() as u32;
        let time_mid = r.next_u16();
        let time_hi_and_version = (r.next_u16() & 0x0fff) | 0x4000;
        let clock_seq = (r.next_u16() & 0x3fff) | 0x8000;
        let node =
            (r.next_u16() as u64) << 32 | (r.next_u16() as u64) << 16 | r.next_u16() as u64;
        Uuid::from_fields(time_low, time_mid, time_hi_and_version, clock_seq, node)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid45::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> core::iter::FusedIterator for V4Generator<R> {}

#[cfg(test)]
mod tests {
    use super::{with_rand08, RandSource, V4Generator};
    use crate::Variant;

    /// Replays a fixed sequence of 16-bit values.
    struct FixedSource<'a>(core::slice::Iter<'a, u16>);

    impl RandSource for FixedSource<'_> {
        fn next_u16(&mut self) -> u16 {
            *self.0.next().expect("fixed source exhausted")
        }
    }

    /// Maps drawn chunks onto fields in order
    #[test]
    fn maps_drawn_chunks_onto_fields_in_order() {
        let chunks = [
            0x0123, 0x4567, 0x89ab, 0xcdef, 0xfedc, 0xba98, 0x7654, 0x3210,
        ];
        let mut g = V4Generator::new(FixedSource(chunks.iter()));
        assert_eq!(
            &g.generate().encode() as &str,
            "01234567-89ab-4def-bedc-ba9876543210"
        );
    }

    /// Forces version and variant bits regardless of drawn values
    #[test]
    fn forces_version_and_variant_bits_regardless_of_drawn_values() {
        let cases: [([u16; 8], &str); 2] = [
            ([0; 8], "00000000-0000-4000-8000-000000000000"),
            ([0xffff; 8], "ffffffff-ffff-4fff-bfff-ffffffffffff"),
        ];
        for (chunks, text) in cases {
            let e = V4Generator::new(FixedSource(chunks.iter())).generate();
            assert_eq!(&e.encode() as &str, text);
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(4));
        }
    }

    /// Reproduces sequence from seeded source
    #[test]
    fn reproduces_sequence_from_seeded_source() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let g = V4Generator::with_rand08(ChaCha8Rng::seed_from_u64(7));
        let h: V4Generator<with_rand08::Adapter<_>> =
            V4Generator::new(with_rand08::Adapter(ChaCha8Rng::seed_from_u64(7)));
        assert!(g.take(100).eq(h.take(100)));

        let mut g = V4Generator::with_rand08(ChaCha8Rng::seed_from_u64(7));
        let mut h = V4Generator::with_rand08(ChaCha8Rng::seed_from_u64(8));
        assert_ne!(g.generate(), h.generate());
    }

    /// Works as iterator
    #[test]
    fn works_as_iterator() {
        let g = V4Generator::with_rand08(rand::thread_rng());
        for e in g.take(1_000) {
            assert_eq!(e.version(), Some(4));
            assert_eq!(e.variant(), Variant::Var10);
        }
    }
}
