//! `serde` support: a cell serializes as its current value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{AtomicBoolean, AtomicInteger, AtomicRef};

impl<T: Serialize> Serialize for AtomicRef<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with_value(|value| value.serialize(serializer))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for AtomicRef<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<N: Copy + Serialize> Serialize for AtomicInteger<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.load_copy().serialize(serializer)
    }
}

impl<'de, N: Deserialize<'de>> Deserialize<'de> for AtomicInteger<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        N::deserialize(deserializer).map(Self::new)
    }
}

impl Serialize for AtomicBoolean {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.load_copy())
    }
}

impl<'de> Deserialize<'de> for AtomicBoolean {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Self::new)
    }
}
