//! Reservations
//!
//! The wish-id to reserver mapping. It is always loaded and persisted as a
//! whole; entries for wishes that no longer exist are kept as they are.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum length of a reserver name, counted in characters after trimming
pub const MIN_NAME_CHARS: usize = 2;

/// One entry of the reservation map.
///
/// Older data stored a plain flag instead of the reserver's name. `null` and
/// numbers read as an empty name, so one odd entry never loses the whole map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reservation {
    Name(String),
    Flag(bool),
}

impl<'de> Deserialize<'de> for Reservation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ReservationVisitor)
    }
}

struct ReservationVisitor;

impl<'de> Visitor<'de> for ReservationVisitor {
    type Value = Reservation;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a reserver name, a flag or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Reservation, E> {
        Ok(Reservation::Name(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Reservation, E> {
        Ok(Reservation::Name(value))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Reservation, E> {
        Ok(Reservation::Flag(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Reservation, E> {
        Ok(Reservation::Name(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Reservation, E> {
        self.visit_unit()
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Reservation, E> {
        self.visit_unit()
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Reservation, E> {
        self.visit_unit()
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Reservation, E> {
        self.visit_unit()
    }
}

impl Reservation {
    pub fn is_reserved(&self) -> bool {
        match self {
            Reservation::Name(name) => !name.is_empty(),
            Reservation::Flag(flag) => *flag,
        }
    }

    /// Reserver name, if the entry carries one
    pub fn name(&self) -> Option<&str> {
        match self {
            Reservation::Name(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

/// Full reservation map keyed by wish id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reservations(BTreeMap<String, Reservation>);

impl Reservations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, wish_id: &str) -> Option<&Reservation> {
        self.0.get(wish_id)
    }

    pub fn is_reserved(&self, wish_id: &str) -> bool {
        self.get(wish_id).is_some_and(Reservation::is_reserved)
    }

    /// Status line shown on a reserved card, `None` when unreserved
    pub fn status_line(&self, wish_id: &str) -> Option<String> {
        let entry = self.get(wish_id).filter(|entry| entry.is_reserved())?;
        Some(match entry.name() {
            Some(name) => format!("Reserviert von {} ✔", name),
            None => "Reserviert ✔".to_string(),
        })
    }

    pub fn reserve(&mut self, wish_id: impl Into<String>, name: &ReserverName) {
        self.0
            .insert(wish_id.into(), Reservation::Name(name.as_str().to_string()));
    }

    pub fn release(&mut self, wish_id: &str) -> Option<Reservation> {
        self.0.remove(wish_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Reservation)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Reservation)> for Reservations {
    fn from_iter<I: IntoIterator<Item = (String, Reservation)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name must have at least {min} characters")]
    TooShort { min: usize },
}

/// A trimmed reserver name of at least [`MIN_NAME_CHARS`] characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReserverName(String);

impl ReserverName {
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let name = input.trim();
        if name.chars().count() < MIN_NAME_CHARS {
            return Err(NameError::TooShort {
                min: MIN_NAME_CHARS,
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReserverName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
