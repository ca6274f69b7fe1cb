use crate::hex::Hex;
use fnv::FnvBuildHasher;
use std::collections::{HashMap, HashSet};

/// A set of hexes
pub type HexSet = HashSet<Hex, FnvBuildHasher>;
/// A map of hexes to some `T`
pub type HexMap<T> = HashMap<Hex, T, FnvBuildHasher>;

/// Serialize a [HexMap] as a list of `[hex, value]` pairs instead of a map.
/// Hexes serialize as arrays, and JSON (along with plenty of other formats)
/// doesn't support non-string map keys. Use it with
/// `#[serde(with = "hexgrid::serde_hex_map")]`.
pub mod serde_hex_map {
    use super::HexMap;
    use crate::hex::Hex;
    use serde::{
        de::Error as _, ser::SerializeSeq, Deserialize, Deserializer, Serialize,
        Serializer,
    };

    /// Serialize a hex map as a list of pairs
    pub fn serialize<T, S>(
        map: &HexMap<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for entry in map {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    /// Deserialize a list of pairs into a map. Fails if the same hex appears
    /// more than once, rather than silently dropping one of the values.
    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<HexMap<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let entries: Vec<(Hex, T)> = Vec::deserialize(deserializer)?;
        let mut map =
            HexMap::with_capacity_and_hasher(entries.len(), Default::default());
        for (hex, value) in entries {
            if map.insert(hex, value).is_some() {
                return Err(D::Error::custom(format!(
                    "duplicate hex {} in map",
                    hex
                )));
            }
        }
        Ok(map)
    }
}
