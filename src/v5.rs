//! UUIDv5-related functionality

use sha1::{Digest, Sha1};

use crate::{Error, Uuid};

impl Uuid {
    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self =
        Self::from_fields(0x6ba7b810, 0x9dad, 0x11d1, 0x80b4, 0x00c04fd430c8);

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self =
        Self::from_fields(0x6ba7b811, 0x9dad, 0x11d1, 0x80b4, 0x00c04fd430c8);

    /// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self =
        Self::from_fields(0x6ba7b812, 0x9dad, 0x11d1, 0x80b4, 0x00c04fd430c8);

    /// Namespace for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self =
        Self::from_fields(0x6ba7b814, 0x9dad, 0x11d1, 0x80b4, 0x00c04fd430c8);

    /// Creates a UUIDv5 object from a namespace UUID and a name.
    ///
    /// The result is the first 128 bits of `SHA1(namespace || name)` with the version nibble set
    /// at `0101` and the variant bits at `10`. The same pair of arguments always yields the same
    /// UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid45::Uuid;
    ///
    /// let uuid = Uuid::new_v5(&Uuid::NAMESPACE_DNS, b"www.example.com");
    /// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
    /// ```
    pub fn new_v5(namespace: &Uuid, name: &[u8]) -> Self {
        let digest = Sha1::new()
            .chain_update(namespace.as_bytes())
            .chain_update(name)
            .finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        bytes[6] = 0x50 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self::from_bytes(bytes)
    }
}

/// Generates a UUIDv5 object from a namespace string and a name.
///
/// `namespace` may be written in any form [`Uuid::parse_relaxed()`] accepts. `name` is taken as
/// opaque bytes; a `&str` contributes its UTF-8 encoding. To derive from another [`Uuid`], pass its
/// string form (e.g. `uuid.to_string()`); a `Uuid` value is not itself accepted as a name.
///
/// # Errors
///
/// Returns [`Error::InvalidNamespace`] if `namespace` is not a valid UUID string representation.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid45::uuid5("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "www.example.com")?;
/// println!("{}", uuid); // "2ed6657d-e927-568b-95e1-2665a8aea6a2"
///
/// assert!(uuid45::uuid5("not-a-uuid", "x").is_err());
/// # Ok::<(), uuid45::Error>(())
/// ```
pub fn uuid5(namespace: &str, name: impl AsRef<[u8]>) -> Result<Uuid, Error> {
    let namespace = Uuid::parse_relaxed(namespace).map_err(|err| {
        tracing::debug!(namespace, "rejected namespace");
        Error::InvalidNamespace(err)
    })?;
    let uuid = Uuid::new_v5(&namespace, name.as_ref());
    tracing::trace!(%namespace, %uuid, "derived name-based UUID");
    Ok(uuid)
}
