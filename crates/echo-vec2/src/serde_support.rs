// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serde support for [`Vector`].
//!
//! Vectors serialize as `{"x": .., "y": ..}` and deserialize from either
//! that keyed form or a two-element sequence `[x, y]`.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::vector::Vector;

impl Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Vector", 2)?;
        state.serialize_field("x", &self.x())?;
        state.serialize_field("y", &self.y())?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Keyed {
    x: f64,
    y: f64,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Repr {
    Pair(f64, f64),
    Keyed(Keyed),
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Pair(x, y) | Repr::Keyed(Keyed { x, y }) => Self::new(x, y),
        })
    }
}
