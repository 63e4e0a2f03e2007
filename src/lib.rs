//! RFC 4122 UUIDs of version 4 (random) and version 5 (name-based, SHA-1)
//!
//! ```rust
//! use uuid45::{uuid4, uuid5};
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let uuid = uuid5("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "www.example.com")?;
//! assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! # Ok::<(), uuid45::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|       clock_seq           |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - The 4-bit `ver` field is set at `0100` for version 4 and `0101` for version 5.
//! - The 2-bit `var` field is set at `10`.
//! - In version 4, the remaining 122 bits are filled with pseudo-random numbers.
//! - In version 5, the remaining 122 bits are taken from the first 128 bits of the SHA-1 digest of
//!   the namespace UUID bytes followed by the name bytes.
//!
//! # Validation
//!
//! [`is_valid()`] checks the shape of a UUID string without looking at the version or variant
//! bits. Besides the canonical form, it accepts uppercase digits, omitted hyphens, and a pair of
//! surrounding braces:
//!
//! ```rust
//! assert!(uuid45::is_valid("{1546058F5A25433485AEE68F2A44BBAF}"));
//! assert!(!uuid45::is_valid("{1546058f-5a25-4334-85ae-e68f2a44bbaf"));
//! ```
//!
//! # Crate features
//!
//! - `global_gen` (default): the process-wide generator behind [`uuid4()`]. Implies `std`.
//! - `std`: `String` conversions and the `std::error::Error` impls. Without it, the crate is
//!   `no_std`.
//! - `serde`: serialization as the canonical string.
//! - `uuid`: conversions from and to `uuid::Uuid`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, ParseError};

mod id;
pub use id::{Uuid, Variant};

mod parse;
pub use parse::is_valid;

pub mod generator;
#[doc(inline)]
pub use generator::{RandSource, V4Generator};

mod v5;
pub use v5::uuid5;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid4;
