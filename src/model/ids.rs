// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric identifier tagged with the table it indexes.
///
/// Raw storage addresses and mined diagram ids are both plain integers on the wire, but they
/// address different tables; the tag keeps one from being looked up in the other.
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(value: u64) -> Self {
        Self { value, _marker: PhantomData }
    }

    pub const fn get(self) -> u64 {
        self.value
    }
}

// Manual impls: derives would bound `T`, which is only ever an uninhabited tag.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.value))
    }
}

impl<T> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self::new)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value)
    }
}

// Goes through `deserialize_u64`, which serde_json also accepts for stringified object keys.
impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}

impl<T> JsonSchema for Id<T> {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("Id")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        u64::json_schema(generator)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressTag {}
/// Storage address of a raw (pre-mining) node; the key of the raw node table.
pub type Address = Id<AddressTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeIdTag {}
/// Diagram-assigned id of a mined node; the key of the mined node table.
pub type NodeId = Id<NodeIdTag>;

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{Address, NodeId};

    #[test]
    fn ids_serialize_as_plain_integers() {
        let addr = Address::new(4198);
        assert_eq!(serde_json::to_string(&addr).expect("encode"), "4198");
        let back: Address = serde_json::from_str("4198").expect("decode");
        assert_eq!(back, addr);
    }

    #[test]
    fn ids_work_as_json_object_keys() {
        let mut table = BTreeMap::new();
        table.insert(NodeId::new(7), "seven");
        let text = serde_json::to_string(&table).expect("encode");
        assert_eq!(text, r#"{"7":"seven"}"#);
        let back: BTreeMap<NodeId, String> = serde_json::from_str(&text).expect("decode");
        assert_eq!(back.get(&NodeId::new(7)).map(String::as_str), Some("seven"));
    }

    #[test]
    fn display_matches_wire_digits() {
        assert_eq!(NodeId::new(0).to_string(), "0");
        assert_eq!(Address::new(u64::MAX).to_string(), u64::MAX.to_string());
    }
}
