/// Hashing helpers.
///
/// Implements the FNV-1a 64-bit digest used by the string hash-key rule.
pub mod hash;
/// Numeric conversion helpers.
///
/// Provides conversions between the language's 64-bit signed integers and
/// host-side unsigned sizes, used wherever an integer serves as an index.
pub mod num;
