//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv4 object.
///
/// This function employs a process-wide generator that is safe to call from multiple threads. On
/// Unix, the generator is reseeded when the process ID changes (i.e., upon process forks) so that
/// parent and child processes do not produce the same sequence.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid45::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
///
/// let uuid_string: String = uuid45::uuid4().to_string();
/// assert!(uuid45::is_valid(&uuid_string));
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{with_rand08::Adapter, V4Generator};

    /// The random number generator of the global generator.
    ///
    /// [`ChaCha12Core`] with [`ReseedingRng`] wrapper emulates the strategy used by
    /// [`rand::rngs::ThreadRng`].
    type GlobalGenRng = Adapter<ReseedingRng<ChaCha12Core, OsRng>>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V4Generator<GlobalGenRng>,
    }

    /// Creates a generator over `core` that reseeds from [`OsRng`] every `threshold` bytes (never
    /// if zero).
    fn new_generator(core: ChaCha12Core, threshold: u64) -> V4Generator<GlobalGenRng> {
        V4Generator::with_rand08(ReseedingRng::new(core, threshold, OsRng))
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("uuid45: could not initialize global generator");
            tracing::debug!("seeded global UUIDv4 generator");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: new_generator(core, 1024 * 64),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V4Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V4Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.generator
        }
    }

}
