// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use wayfare_app::{Destination, EventId, EventPayload, OfferGroup, TripEvent};
use wayfare_testkit::TripFaker;

/// The on-disk trip document: all three collections in one JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripData {
    #[serde(default)]
    pub events: Vec<TripEvent>,
    #[serde(default)]
    pub offers: Vec<OfferGroup>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

pub fn load_trip_data(path: &Path) -> Result<TripData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read trip file {}", path.display()))?;
    let data: TripData = serde_json::from_str(&raw)
        .with_context(|| format!("parse trip file {}", path.display()))?;
    Ok(data)
}

/// In-memory planner store. Edits live for the session; there is no
/// write-back to the trip file.
pub struct MemoryRuntime {
    data: TripData,
}

impl MemoryRuntime {
    pub fn new(data: TripData) -> Self {
        Self { data }
    }

    pub fn demo(seed: u64) -> Self {
        let mut faker = TripFaker::new(seed);
        let fixture = faker.trip_fixture(20);
        Self {
            data: TripData {
                events: fixture.events,
                offers: fixture.offers,
                destinations: fixture.destinations,
            },
        }
    }

    fn validate_payload(&self, payload: &EventPayload) -> Result<i64> {
        let raw = payload.base_price.trim();
        let price: i64 = raw
            .parse()
            .with_context(|| format!("price must be a whole number, got {raw:?}"))?;
        if price < 0 {
            bail!("price must not be negative, got {price}");
        }

        let (Some(from), Some(to)) = (payload.date_from, payload.date_to) else {
            bail!("both start and end dates are required");
        };
        if from > to {
            bail!("start date {from} is after end date {to}");
        }

        if let Some(destination_id) = &payload.destination_id
            && !self
                .data
                .destinations
                .iter()
                .any(|destination| destination.id == *destination_id)
        {
            bail!("unknown destination {destination_id}");
        }

        Ok(price)
    }
}

impl wayfare_tui::PlannerRuntime for MemoryRuntime {
    fn load_events(&mut self) -> Result<Vec<TripEvent>> {
        Ok(self.data.events.clone())
    }

    fn load_offer_catalog(&mut self) -> Result<Vec<OfferGroup>> {
        Ok(self.data.offers.clone())
    }

    fn load_destinations(&mut self) -> Result<Vec<Destination>> {
        Ok(self.data.destinations.clone())
    }

    fn commit_event(&mut self, payload: &EventPayload) -> Result<TripEvent> {
        let price = self.validate_payload(payload)?;
        let stored = TripEvent {
            id: payload.id.clone(),
            event_type: payload.event_type,
            destination_id: payload.destination_id.clone(),
            date_from: payload.date_from,
            date_to: payload.date_to,
            base_price: price,
            offer_ids: payload.offer_ids.clone(),
            is_favorite: payload.is_favorite,
        };

        if let Some(existing) = self
            .data
            .events
            .iter_mut()
            .find(|event| event.id == stored.id)
        {
            *existing = stored.clone();
        } else {
            self.data.events.push(stored.clone());
        }
        Ok(stored)
    }

    fn delete_event(&mut self, id: &EventId) -> Result<()> {
        let before = self.data.events.len();
        self.data.events.retain(|event| event.id != *id);
        if self.data.events.len() == before {
            bail!("unknown event {id}");
        }
        Ok(())
    }

    fn toggle_favorite(&mut self, id: &EventId) -> Result<TripEvent> {
        let Some(event) = self.data.events.iter_mut().find(|event| event.id == *id) else {
            bail!("unknown event {id}");
        };
        event.is_favorite = !event.is_favorite;
        Ok(event.clone())
    }
}
