// crates/domain/src/schema.rs
//! Serialized form of [`IntRange`].
//!
//! Ranges are written as `{ "min": .., "max": .. }`. Older data used other
//! field names; [`FIELD_RENAMES`] maps every historical name onto the current
//! one while deserializing.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
    ser::SerializeStruct,
};

use crate::value_objects::IntRange;

/// Schema generation written by this version.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

const MIN_FIELD: &str = "min";
const MAX_FIELD: &str = "max";
const FIELDS: &[&str] = &[MIN_FIELD, MAX_FIELD];

/// Legacy field names as `(generation, legacy name, current name)`.
pub const FIELD_RENAMES: &[(u32, &str, &str)] = &[
    (0, "m_Min", MIN_FIELD),
    (0, "m_Max", MAX_FIELD),
    (1, "_min", MIN_FIELD),
    (1, "_max", MAX_FIELD),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Min,
    Max,
}

/// Resolves a serialized key to a field, reporting the generation it came from
/// and the canonical spelling of the key.
fn resolve_field(key: &str) -> Option<(Field, u32, &'static str)> {
    match key {
        MIN_FIELD => return Some((Field::Min, CURRENT_SCHEMA_VERSION, MIN_FIELD)),
        MAX_FIELD => return Some((Field::Max, CURRENT_SCHEMA_VERSION, MAX_FIELD)),
        _ => {}
    }

    FIELD_RENAMES.iter().find(|(_, legacy, _)| *legacy == key).map(|&(generation, legacy, target)| {
        let field = if target == MIN_FIELD { Field::Min } else { Field::Max };
        (field, generation, legacy)
    })
}

impl Serialize for IntRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IntRange", 2)?;
        state.serialize_field(MIN_FIELD, &self.min())?;
        state.serialize_field(MAX_FIELD, &self.max())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for IntRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct("IntRange", FIELDS, IntRangeVisitor)
    }
}

struct IntRangeVisitor;

/// A bound together with the key and schema generation it was read from.
#[derive(Clone, Copy)]
struct Slot {
    value: i32,
    generation: u32,
    key: &'static str,
}

impl Slot {
    /// Keeps the value from the newest generation.
    ///
    /// Each generation has one name per bound, so a tie means the same key
    /// appeared twice.
    fn merge<E: de::Error>(current: Option<Self>, incoming: Self) -> Result<Self, E> {
        match current {
            Some(existing) if existing.generation == incoming.generation => {
                Err(E::duplicate_field(incoming.key))
            }
            Some(existing) if existing.generation > incoming.generation => {
                log::debug!(
                    "ignoring '{}' from schema generation {} in favour of '{}' from generation {}",
                    incoming.key,
                    incoming.generation,
                    existing.key,
                    existing.generation
                );
                Ok(existing)
            }
            _ => Ok(incoming),
        }
    }
}

impl IntRangeVisitor {
    fn finish(min: i32, max: i32) -> IntRange {
        let range = IntRange::new(min, max);
        if range.min() != min {
            log::warn!("serialized range had min {min} > max {max}; stored as {range}");
        }
        range
    }
}

impl<'de> Visitor<'de> for IntRangeVisitor {
    type Value = IntRange;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer range as a map with min/max or a two-element sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let min = seq.next_element::<i32>()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let max = seq.next_element::<i32>()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(Self::finish(min, max))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut min: Option<Slot> = None;
        let mut max: Option<Slot> = None;

        while let Some(key) = map.next_key::<String>()? {
            match resolve_field(&key) {
                Some((field, generation, name)) => {
                    let slot = Slot { value: map.next_value()?, generation, key: name };
                    if generation < CURRENT_SCHEMA_VERSION {
                        log::debug!("migrating legacy field '{key}' (schema generation {generation})");
                    }
                    match field {
                        Field::Min => min = Some(Slot::merge(min, slot)?),
                        Field::Max => max = Some(Slot::merge(max, slot)?),
                    }
                }
                None => {
                    log::debug!("skipping unknown field '{key}' in serialized range");
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let min = min.ok_or_else(|| de::Error::missing_field(MIN_FIELD))?;
        let max = max.ok_or_else(|| de::Error::missing_field(MAX_FIELD))?;
        Ok(Self::finish(min.value, max.value))
    }
}
