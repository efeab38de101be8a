// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::OffsetDateTime;

use crate::{DestinationId, EventId, EventType, OfferId, TripEvent};

/// Mutable in-progress copy of an event held by the editor during an
/// edit session. `base_price` is raw text until the owner parses it on
/// submit; the UI flags are transient and never reach the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub id: EventId,
    pub event_type: EventType,
    pub destination_id: Option<DestinationId>,
    pub date_from: Option<OffsetDateTime>,
    pub date_to: Option<OffsetDateTime>,
    pub base_price: String,
    pub offer_ids: Vec<OfferId>,
    pub is_favorite: bool,
    pub is_saving: bool,
    pub is_deleting: bool,
}

/// What the editor hands back to its owner. Structurally flag-free, so
/// "strip isSaving/isDeleting before submit" holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    pub id: EventId,
    pub event_type: EventType,
    pub destination_id: Option<DestinationId>,
    pub date_from: Option<OffsetDateTime>,
    pub date_to: Option<OffsetDateTime>,
    pub base_price: String,
    pub offer_ids: Vec<OfferId>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftPatch {
    ChooseType(EventType),
    ChooseDestination(Option<DestinationId>),
    SetDateFrom(OffsetDateTime),
    SetDateTo(OffsetDateTime),
    SetPrice(String),
    CheckOffer(OfferId),
    UncheckOffer(OfferId),
}

/// Whether a patch changes which sections/controls exist in the
/// rendered markup. Structural changes force a full re-render and a
/// re-bind of handlers and pickers; in-place changes deliberately do
/// not, so focus and picker widgets survive mid-edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEffect {
    Structural,
    InPlace,
}

impl EventDraft {
    pub fn from_event(event: &TripEvent) -> Self {
        Self {
            id: event.id.clone(),
            event_type: event.event_type,
            destination_id: event.destination_id.clone(),
            date_from: event.date_from,
            date_to: event.date_to,
            base_price: event.base_price.to_string(),
            offer_ids: event.offer_ids.clone(),
            is_favorite: event.is_favorite,
            is_saving: false,
            is_deleting: false,
        }
    }

    /// Wholesale replacement with a fresh copy, used when an external
    /// edit is cancelled or reverted.
    pub fn reset(&mut self, event: &TripEvent) {
        *self = Self::from_event(event);
    }

    pub fn apply(&mut self, patch: DraftPatch) -> RenderEffect {
        match patch {
            DraftPatch::ChooseType(event_type) => {
                self.event_type = event_type;
                // Offer ids are scoped to the type; no stale
                // cross-type references survive a type change.
                self.offer_ids.clear();
                RenderEffect::Structural
            }
            DraftPatch::ChooseDestination(destination_id) => {
                self.destination_id = destination_id;
                RenderEffect::Structural
            }
            DraftPatch::SetDateFrom(value) => {
                self.date_from = Some(value);
                RenderEffect::Structural
            }
            DraftPatch::SetDateTo(value) => {
                self.date_to = Some(value);
                RenderEffect::Structural
            }
            DraftPatch::SetPrice(raw) => {
                self.base_price = raw;
                RenderEffect::InPlace
            }
            DraftPatch::CheckOffer(offer_id) => {
                if !self.offer_ids.contains(&offer_id) {
                    self.offer_ids.push(offer_id);
                }
                RenderEffect::InPlace
            }
            DraftPatch::UncheckOffer(offer_id) => {
                if let Some(position) = self.offer_ids.iter().position(|id| *id == offer_id) {
                    self.offer_ids.remove(position);
                }
                RenderEffect::InPlace
            }
        }
    }

    pub fn payload(&self) -> EventPayload {
        EventPayload {
            id: self.id.clone(),
            event_type: self.event_type,
            destination_id: self.destination_id.clone(),
            date_from: self.date_from,
            date_to: self.date_to,
            base_price: self.base_price.clone(),
            offer_ids: self.offer_ids.clone(),
            is_favorite: self.is_favorite,
        }
    }

    pub fn into_payload(self) -> EventPayload {
        EventPayload {
            id: self.id,
            event_type: self.event_type,
            destination_id: self.destination_id,
            date_from: self.date_from,
            date_to: self.date_to,
            base_price: self.base_price,
            offer_ids: self.offer_ids,
            is_favorite: self.is_favorite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DraftPatch, EventDraft, RenderEffect};
    use crate::{DestinationId, EventId, EventType, OfferId, TripEvent};
    use time::macros::datetime;

    fn sample_event() -> TripEvent {
        TripEvent {
            id: EventId::new("e1"),
            event_type: EventType::Taxi,
            destination_id: Some(DestinationId::new("d1")),
            date_from: Some(datetime!(2024-03-18 10:00 UTC)),
            date_to: Some(datetime!(2024-03-18 12:00 UTC)),
            base_price: 20,
            offer_ids: vec![OfferId::new("o1"), OfferId::new("o2")],
            is_favorite: false,
        }
    }

    #[test]
    fn draft_seeds_from_event_with_flags_cleared() {
        let draft = EventDraft::from_event(&sample_event());
        assert_eq!(draft.base_price, "20");
        assert!(!draft.is_saving);
        assert!(!draft.is_deleting);
    }

    #[test]
    fn type_change_clears_offer_selection() {
        let mut draft = EventDraft::from_event(&sample_event());
        let effect = draft.apply(DraftPatch::ChooseType(EventType::Flight));
        assert_eq!(effect, RenderEffect::Structural);
        assert_eq!(draft.event_type, EventType::Flight);
        assert!(draft.offer_ids.is_empty());
    }

    #[test]
    fn offer_toggle_round_trip_restores_selection() {
        let mut draft = EventDraft::from_event(&sample_event());
        let before = draft.offer_ids.clone();

        assert_eq!(
            draft.apply(DraftPatch::CheckOffer(OfferId::new("o5"))),
            RenderEffect::InPlace
        );
        assert!(draft.offer_ids.contains(&OfferId::new("o5")));

        assert_eq!(
            draft.apply(DraftPatch::UncheckOffer(OfferId::new("o5"))),
            RenderEffect::InPlace
        );
        assert_eq!(draft.offer_ids, before);
    }

    #[test]
    fn uncheck_removes_only_first_match() {
        let mut draft = EventDraft::from_event(&sample_event());
        draft.apply(DraftPatch::UncheckOffer(OfferId::new("o1")));
        assert_eq!(draft.offer_ids, vec![OfferId::new("o2")]);

        // Unselected ids are a no-op.
        draft.apply(DraftPatch::UncheckOffer(OfferId::new("o9")));
        assert_eq!(draft.offer_ids, vec![OfferId::new("o2")]);
    }

    #[test]
    fn price_text_is_stored_raw_without_coercion() {
        let mut draft = EventDraft::from_event(&sample_event());
        let effect = draft.apply(DraftPatch::SetPrice("150".to_owned()));
        assert_eq!(effect, RenderEffect::InPlace);
        assert_eq!(draft.base_price, "150");

        draft.apply(DraftPatch::SetPrice("not-a-number".to_owned()));
        assert_eq!(draft.base_price, "not-a-number");
    }

    #[test]
    fn date_patches_are_structural() {
        let mut draft = EventDraft::from_event(&sample_event());
        let effect = draft.apply(DraftPatch::SetDateFrom(datetime!(2024-03-18 09:00 UTC)));
        assert_eq!(effect, RenderEffect::Structural);
        assert_eq!(draft.date_from, Some(datetime!(2024-03-18 09:00 UTC)));
    }

    #[test]
    fn reset_restores_a_fresh_copy() {
        let event = sample_event();
        let mut draft = EventDraft::from_event(&event);
        draft.apply(DraftPatch::ChooseType(EventType::Ship));
        draft.apply(DraftPatch::SetPrice("999".to_owned()));
        draft.is_saving = true;

        draft.reset(&event);
        assert_eq!(draft, EventDraft::from_event(&event));
    }

    #[test]
    fn payload_carries_no_ui_flags() {
        let mut draft = EventDraft::from_event(&sample_event());
        draft.is_saving = true;
        draft.is_deleting = true;

        let payload = draft.clone().into_payload();
        assert_eq!(payload.id, draft.id);
        assert_eq!(payload.base_price, draft.base_price);
        assert_eq!(payload, draft.payload());
    }

    #[test]
    fn mutating_a_draft_never_touches_the_source_event() {
        let event = sample_event();
        let mut draft = EventDraft::from_event(&event);
        draft.apply(DraftPatch::ChooseDestination(None));
        draft.apply(DraftPatch::SetPrice("0".to_owned()));

        assert_eq!(event.destination_id, Some(DestinationId::new("d1")));
        assert_eq!(event.base_price, 20);
    }
}
