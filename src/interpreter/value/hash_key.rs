use crate::{interpreter::value::core::Value, util::hash::fnv1a_64};

/// The key under which a hash stores a pair.
///
/// A hash key pairs the value's type tag with a 64-bit digest, so keys of
/// different types never collide: integer `1`, float `1.0`, and `true` are
/// three distinct keys. Equal hashable values always produce equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// The type tag of the key value.
    pub kind:  &'static str,
    /// The digest of the key value.
    pub value: u64,
}

impl Value {
    /// Computes this value's hash key.
    ///
    /// Integers use their two's-complement bits, floats their raw IEEE-754
    /// bit pattern, booleans map to 0 and 1, and strings hash their UTF-8
    /// bytes with FNV-1a 64. Every other variant is not hashable and yields
    /// `None`.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// let int_key = Value::Integer(1).hash_key().unwrap();
    /// let float_key = Value::Float(1.0).hash_key().unwrap();
    /// assert_ne!(int_key, float_key);
    ///
    /// let a = Value::from("name").hash_key().unwrap();
    /// let b = Value::from("name").hash_key().unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(Value::Null.hash_key().is_none());
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        #[allow(clippy::cast_sign_loss)]
        let digest = match self {
            Self::Integer(value) => *value as u64,
            Self::Float(value) => value.to_bits(),
            Self::Bool(value) => u64::from(*value),
            Self::Str(value) => fnv1a_64(value.as_bytes()),
            _ => return None,
        };
        Some(HashKey { kind:  self.type_name(),
                       value: digest, })
    }
}
