//! JSON adapters: an absent [`Maybe`] is the JSON literal `null`, a present
//! one is whatever its payload encodes to. Decoding inverts this, so the
//! round trip reproduces an equivalent optional.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MaybeError;
use crate::maybe::Maybe;

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Present(value) => serializer.serialize_some(value),
            Maybe::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}

impl<T: Serialize> Maybe<T> {
    /// Encodes to a JSON buffer. Absent encodes to exactly the four bytes
    /// `null`; present delegates to the payload's own encoder.
    pub fn to_json(&self) -> Result<Vec<u8>, MaybeError> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl<T: DeserializeOwned> Maybe<T> {
    /// Decodes from a JSON buffer. An empty buffer or the literal `null`
    /// yields `Absent`; anything else must decode into a `T`. On failure
    /// only the error is returned, so no optional is ever left half-set.
    pub fn from_json(buf: &[u8]) -> Result<Self, MaybeError> {
        if buf.is_empty() {
            return Ok(Maybe::Absent);
        }
        Ok(serde_json::from_slice(buf)?)
    }
}
