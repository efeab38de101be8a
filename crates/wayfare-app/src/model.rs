// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EventType {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl EventType {
    pub const ALL: [Self; 9] = [
        Self::Taxi,
        Self::Bus,
        Self::Train,
        Self::Ship,
        Self::Drive,
        Self::Flight,
        Self::CheckIn,
        Self::Sightseeing,
        Self::Restaurant,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Taxi => "taxi",
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Ship => "ship",
            Self::Drive => "drive",
            Self::Flight => "flight",
            Self::CheckIn => "check-in",
            Self::Sightseeing => "sightseeing",
            Self::Restaurant => "restaurant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "taxi" => Some(Self::Taxi),
            "bus" => Some(Self::Bus),
            "train" => Some(Self::Train),
            "ship" => Some(Self::Ship),
            "drive" => Some(Self::Drive),
            "flight" => Some(Self::Flight),
            "check-in" => Some(Self::CheckIn),
            "sightseeing" => Some(Self::Sightseeing),
            "restaurant" => Some(Self::Restaurant),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Taxi => "Taxi",
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Ship => "Ship",
            Self::Drive => "Drive",
            Self::Flight => "Flight",
            Self::CheckIn => "Check-in",
            Self::Sightseeing => "Sightseeing",
            Self::Restaurant => "Restaurant",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl TryFrom<String> for EventType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown event type {value:?}"))
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.as_str().to_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub src: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub description: String,
    pub pictures: Vec<Picture>,
}

impl Destination {
    /// A destination contributes a detail section only when it has
    /// something to show.
    pub fn has_details(&self) -> bool {
        !self.description.is_empty() || !self.pictures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferGroup {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripEvent {
    pub id: EventId,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, rename = "destination")]
    pub destination_id: Option<DestinationId>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_from: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_to: Option<OffsetDateTime>,
    pub base_price: i64,
    #[serde(default, rename = "offers")]
    pub offer_ids: Vec<OfferId>,
    #[serde(default)]
    pub is_favorite: bool,
}

pub fn destination_by_id<'a>(
    destinations: &'a [Destination],
    id: Option<&DestinationId>,
) -> Option<&'a Destination> {
    let id = id?;
    destinations
        .iter()
        .find(|destination| destination.id == *id)
}

pub fn destination_by_name<'a>(
    destinations: &'a [Destination],
    name: &str,
) -> Option<&'a Destination> {
    destinations.iter().find(|destination| destination.name == name)
}

/// Offers available for a given type; an absent catalog group reads as
/// "no offers" rather than an error.
pub fn offers_for_type(catalog: &[OfferGroup], event_type: EventType) -> &[Offer] {
    catalog
        .iter()
        .find(|group| group.event_type == event_type)
        .map(|group| group.offers.as_slice())
        .unwrap_or(&[])
}

/// The selected subset of a type's offer group, in catalog order, not
/// selection order.
pub fn selected_offers<'a>(
    catalog: &'a [OfferGroup],
    event_type: EventType,
    selection: &[OfferId],
) -> Vec<&'a Offer> {
    offers_for_type(catalog, event_type)
        .iter()
        .filter(|offer| selection.contains(&offer.id))
        .collect()
}
