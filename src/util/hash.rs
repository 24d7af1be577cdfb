/// The FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// The FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Computes the FNV-1a 64-bit digest of a byte slice.
///
/// The digest starts at the offset basis; each byte is XORed in and the
/// running value multiplied by the FNV prime, wrapping on overflow.
///
/// # Example
/// ```
/// use monkey::util::hash::{FNV_OFFSET_BASIS, fnv1a_64};
///
/// assert_eq!(fnv1a_64(b""), FNV_OFFSET_BASIS);
/// assert_eq!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
/// assert_eq!(fnv1a_64("one".as_bytes()), fnv1a_64(b"one"));
/// ```
#[must_use]
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut digest = FNV_OFFSET_BASIS;
    let mut index = 0;
    while index < bytes.len() {
        digest ^= bytes[index] as u64;
        digest = digest.wrapping_mul(FNV_PRIME);
        index += 1;
    }
    digest
}
