//! Upgrade levels and lenient numeric coercion.
//!
//! Player records arrive half-filled while members are still editing them,
//! so every numeric field read by the engine goes through one normalization
//! step: absent, null, negative, or non-numeric values become zero,
//! fractional values are truncated, and oversized values saturate. That
//! step lives here, at the deserialization boundary, and never fails.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// The level of a single upgrade node.
///
/// Stored as a `u8`; anything above 255 saturates, which every projection
/// treats as "already complete".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const ZERO: Level = Level(0);

    pub const fn new(value: u8) -> Self {
        Level(value)
    }

    /// Build a level from an arbitrary count, saturating at `u8::MAX`.
    pub const fn saturating(value: u64) -> Self {
        if value > u8::MAX as u64 {
            Level(u8::MAX)
        } else {
            Level(value as u8)
        }
    }

    /// Parse a level typed into a form field. Never fails; see the module
    /// docs for the coercion rules.
    pub fn lenient(text: &str) -> Self {
        Level::saturating(coerce_str(text))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The level as an index into a per-level cost curve. Level `n` means
    /// entries `0..n` have been paid for.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn reached(self, max: u8) -> bool {
        self.0 >= max
    }

    /// The next level up, saturating.
    pub const fn next(self) -> Level {
        Level(self.0.saturating_add(1))
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Level(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Lenient).map(Level::saturating)
    }
}

/// Deserialize a non-negative counter (power stats and the like) with the
/// same rules as [`Level`], but without the `u8` cap.
///
/// Use as `#[serde(default, deserialize_with = "gun1_core::level::lenient_u64")]`.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(Lenient)
}

/// Deserialize a nested record (a whole tree of levels) that may itself be
/// missing or malformed. Maps are read field by field; null, scalars, and
/// sequences yield `T::default()`.
///
/// Use as `#[serde(deserialize_with = "gun1_core::level::lenient_record")]`
/// alongside a container-level `#[serde(default)]`.
pub fn lenient_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    deserializer.deserialize_any(LenientRecord(PhantomData))
}

// ---------------------------------------------------------------------------
// Coercion rules
// ---------------------------------------------------------------------------

fn coerce_f64(v: f64) -> u64 {
    // NaN and negatives fall to zero; `as` saturates at u64::MAX.
    if v.is_nan() || v <= 0.0 { 0 } else { v as u64 }
}

fn coerce_i64(v: i64) -> u64 {
    if v < 0 { 0 } else { v as u64 }
}

fn coerce_str(text: &str) -> u64 {
    let text = text.trim();
    if let Ok(v) = text.parse::<u64>() {
        return v;
    }
    if let Ok(v) = text.parse::<i64>() {
        return coerce_i64(v);
    }
    match text.parse::<f64>() {
        Ok(v) => coerce_f64(v),
        Err(_) => 0,
    }
}

/// Visitor that accepts any self-describing value and produces a count.
struct Lenient;

impl<'de> Visitor<'de> for Lenient {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a level or counter (anything else is read as zero)")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<u64, E> {
        Ok(u64::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        Ok(coerce_i64(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<u64, E> {
        Ok(u64::try_from(v.max(0)).unwrap_or(u64::MAX))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<u64, E> {
        Ok(u64::try_from(v).unwrap_or(u64::MAX))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        Ok(coerce_f64(v))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<u64, E> {
        Ok(v.to_digit(10).map_or(0, u64::from))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        Ok(coerce_str(v))
    }

    fn visit_bytes<E: de::Error>(self, _v: &[u8]) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Lenient)
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Lenient)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<u64, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(0)
    }

    fn visit_map<A>(self, mut map: A) -> Result<u64, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(0)
    }
}

/// Visitor for [`lenient_record`]: only a map carries data.
struct LenientRecord<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for LenientRecord<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a record of levels (anything else is read as empty)")
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_i128<E: de::Error>(self, _v: i128) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_u128<E: de::Error>(self, _v: u128) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_char<E: de::Error>(self, _v: char) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_str<E: de::Error>(self, _v: &str) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_bytes<E: de::Error>(self, _v: &[u8]) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_record(deserializer)
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_record(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<T, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(T::default())
    }

    fn visit_map<A>(self, map: A) -> Result<T, A::Error>
    where
        A: MapAccess<'de>,
    {
        T::deserialize(de::value::MapAccessDeserializer::new(map))
    }
}
