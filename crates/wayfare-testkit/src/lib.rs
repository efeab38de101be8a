// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::path::PathBuf;
use time::{Date, Duration, Month, OffsetDateTime, Time};
use wayfare_app::{
    Destination, DestinationId, EventId, EventType, Offer, OfferGroup, OfferId, Picture, TripEvent,
};

const CITY_NAMES: [&str; 10] = [
    "Amsterdam",
    "Geneva",
    "Chamonix",
    "Rotterdam",
    "Saint Petersburg",
    "Helsinki",
    "Oslo",
    "Kopenhagen",
    "Den Haag",
    "Tokyo",
];

const DESCRIPTION_SENTENCES: [&str; 10] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    "Cras aliquet varius magna, non porta ligula feugiat eget.",
    "Fusce tristique felis at fermentum pharetra.",
    "Aliquam id orci ut lectus varius viverra.",
    "Nullam nunc ex, convallis sed finibus eget, sollicitudin eget ante.",
    "Phasellus eros mauris, condimentum sed nibh vitae, sodales efficitur ipsum.",
    "Sed blandit, eros vel aliquam faucibus, purus ex euismod diam.",
    "Aliquam erat volutpat.",
    "Nunc fermentum tortor ac porta dapibus.",
    "In rutrum ac purus sit amet tempus.",
];

const PICTURE_SUBJECTS: [&str; 6] = [
    "parliament building",
    "central station",
    "embankment",
    "kindergarten",
    "park",
    "street market",
];

const REFERENCE_YEAR: i32 = 2026;

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// A complete trip dataset: the three collections the planner loads.
#[derive(Debug, Clone, PartialEq)]
pub struct TripFixture {
    pub events: Vec<TripEvent>,
    pub offers: Vec<OfferGroup>,
    pub destinations: Vec<Destination>,
}

#[derive(Debug, Clone)]
pub struct TripFaker {
    rng: DeterministicRng,
    event_counter: u64,
}

impl TripFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            event_counter: 0,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn destination(&mut self, index: usize) -> Destination {
        let name = CITY_NAMES[index % CITY_NAMES.len()];
        let with_details = index % 4 != 3;
        let description = if with_details {
            self.sentence_block(1, 4)
        } else {
            String::new()
        };
        let mut pictures = Vec::new();
        if with_details {
            for _ in 0..self.int_range(0, 4) {
                pictures.push(self.picture(name));
            }
        }
        Destination {
            id: DestinationId::new(format!("dest-{}", index + 1)),
            name: name.to_owned(),
            description,
            pictures,
        }
    }

    /// Distinct destinations, capped at the size of the city pool so
    /// names stay unique within one fixture.
    pub fn destinations(&mut self, count: usize) -> Vec<Destination> {
        (0..count.min(CITY_NAMES.len()))
            .map(|index| self.destination(index))
            .collect()
    }

    pub fn offer_group(&mut self, event_type: EventType) -> OfferGroup {
        let offers = offer_options(event_type)
            .iter()
            .enumerate()
            .map(|(index, (title, price))| Offer {
                id: OfferId::new(format!("{}-{}", event_type.as_str(), index + 1)),
                title: (*title).to_owned(),
                price: *price,
            })
            .collect();
        OfferGroup { event_type, offers }
    }

    /// One group per event type, in declaration order. Types with no
    /// catalog entries get an empty group.
    pub fn offer_catalog(&mut self) -> Vec<OfferGroup> {
        EventType::ALL
            .iter()
            .map(|event_type| self.offer_group(*event_type))
            .collect()
    }

    pub fn trip_event(
        &mut self,
        catalog: &[OfferGroup],
        destinations: &[Destination],
    ) -> TripEvent {
        self.event_counter += 1;
        let event_type = EventType::ALL[self.rng.int_n(EventType::ALL.len())];

        let destination_id = if destinations.is_empty() || self.int_range(1, 10) == 1 {
            None
        } else {
            let index = self.rng.int_n(destinations.len());
            Some(destinations[index].id.clone())
        };

        let date_from = self.date_in_year(REFERENCE_YEAR);
        let date_to = date_from + Duration::minutes(self.int_range(30, 3 * 24 * 60) as i64);

        let available = catalog
            .iter()
            .find(|group| group.event_type == event_type)
            .map(|group| group.offers.as_slice())
            .unwrap_or(&[]);
        let offer_ids = available
            .iter()
            .filter(|_| self.rng.bool())
            .map(|offer| offer.id.clone())
            .collect();

        TripEvent {
            id: EventId::new(format!("event-{}", self.event_counter)),
            event_type,
            destination_id,
            date_from: Some(date_from),
            date_to: Some(date_to),
            base_price: self.int_range(20, 1100) as i64,
            offer_ids,
            is_favorite: self.rng.bool(),
        }
    }

    pub fn trip_fixture(&mut self, event_count: usize) -> TripFixture {
        let destinations = self.destinations(CITY_NAMES.len());
        let offers = self.offer_catalog();
        let events = (0..event_count)
            .map(|_| self.trip_event(&offers, &destinations))
            .collect();
        TripFixture {
            events,
            offers,
            destinations,
        }
    }

    pub fn date_in_year(&mut self, year: i32) -> OffsetDateTime {
        let start = midnight_utc(year, Month::January, 1);
        let end =
            midnight_utc(year, Month::December, 31) + Duration::days(1) - Duration::seconds(1);
        let start_ts = start.unix_timestamp();
        let span = (end.unix_timestamp() - start_ts) as u64;
        let offset = self.rng.next_u64() % (span + 1);
        OffsetDateTime::from_unix_timestamp(start_ts + offset as i64).expect("valid unix timestamp")
    }

    fn picture(&mut self, city: &str) -> Picture {
        let subject = PICTURE_SUBJECTS[self.rng.int_n(PICTURE_SUBJECTS.len())];
        Picture {
            src: format!(
                "https://loremflickr.com/248/152?r={}",
                self.int_range(1, 100_000)
            ),
            description: format!("{city} {subject}"),
        }
    }

    fn sentence_block(&mut self, min_sentences: usize, max_sentences: usize) -> String {
        let count = self.int_range(min_sentences, max_sentences);
        let mut parts = Vec::with_capacity(count);
        for _ in 0..count {
            parts.push(DESCRIPTION_SENTENCES[self.rng.int_n(DESCRIPTION_SENTENCES.len())]);
        }
        parts.join(" ")
    }

    fn int_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        min + (self.rng.next_u64() % ((max - min + 1) as u64)) as usize
    }
}

pub fn fixture_json(fixture: &TripFixture) -> Result<String> {
    let value = serde_json::json!({
        "events": fixture.events,
        "offers": fixture.offers,
        "destinations": fixture.destinations,
    });
    serde_json::to_string_pretty(&value).context("serialize trip fixture")
}

/// Writes a fixture to a `trip.json` in a fresh temp dir. The dir
/// handle must be kept alive for the duration of the test.
pub fn temp_fixture(fixture: &TripFixture) -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("trip.json");
    std::fs::write(&path, fixture_json(fixture)?)
        .with_context(|| format!("write fixture to {}", path.display()))?;
    Ok((dir, path))
}

pub fn fixture_datetime() -> &'static str {
    "2026-02-19T12:34:56Z"
}

pub fn city_names() -> &'static [&'static str] {
    &CITY_NAMES
}

fn midnight_utc(year: i32, month: Month, day: u8) -> OffsetDateTime {
    let date = Date::from_calendar_date(year, month, day).expect("valid calendar date");
    let midnight = Time::from_hms(0, 0, 0).expect("valid midnight");
    date.with_time(midnight).assume_utc()
}

fn offer_options(event_type: EventType) -> &'static [(&'static str, i64)] {
    match event_type {
        EventType::Taxi => &[("Order Uber", 20), ("Switch to comfort", 30)],
        EventType::Bus => &[("Choose seats", 5)],
        EventType::Train => &[("Travel in first class", 100), ("Add meal", 15)],
        EventType::Ship => &[("Upgrade cabin", 120), ("Add meal", 15)],
        EventType::Drive => &[("Rent a car", 200)],
        EventType::Flight => &[
            ("Add luggage", 50),
            ("Switch to comfort", 80),
            ("Add meal", 15),
            ("Choose seats", 5),
        ],
        EventType::CheckIn => &[("Add breakfast", 50)],
        EventType::Sightseeing => &[("Book tickets", 40), ("Lunch in city", 30)],
        EventType::Restaurant => &[],
    }
}
