// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Paired date-time pickers for the edit form. Each picker is a
//! construct-on-mount / destroy-on-unmount resource; the pair is the
//! only cross-field consistency mechanism between the two date fields.

use time::OffsetDateTime;

use crate::EventDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerField {
    DateFrom,
    DateTo,
}

impl PickerField {
    pub const fn hook(self) -> &'static str {
        match self {
            Self::DateFrom => "event-start-time-1",
            Self::DateTo => "event-end-time-1",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DateFrom => "start",
            Self::DateTo => "end",
        }
    }
}

/// One mounted picker widget: fixed edit format, time selection
/// enabled on a 24-hour clock, a default value, and one cross bound
/// taken from the opposing field at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    field: PickerField,
    default: OffsetDateTime,
    min: Option<OffsetDateTime>,
    max: Option<OffsetDateTime>,
}

impl DatePicker {
    fn mount(field: PickerField, draft: &EventDraft, now: OffsetDateTime) -> Self {
        match field {
            PickerField::DateFrom => Self {
                field,
                default: draft.date_from.unwrap_or(now),
                min: None,
                max: draft.date_to,
            },
            PickerField::DateTo => Self {
                field,
                default: draft.date_to.unwrap_or(now),
                min: draft.date_from,
                max: None,
            },
        }
    }

    pub const fn field(self) -> PickerField {
        self.field
    }

    pub const fn default_value(self) -> OffsetDateTime {
        self.default
    }

    pub const fn effective_min(self) -> Option<OffsetDateTime> {
        self.min
    }

    pub const fn effective_max(self) -> Option<OffsetDateTime> {
        self.max
    }

    /// Folds a candidate value into the picker's bounds, so the pair
    /// can never present a reversed range.
    pub fn clamp(self, candidate: OffsetDateTime) -> OffsetDateTime {
        let mut value = candidate;
        if let Some(min) = self.min
            && value < min
        {
            value = min;
        }
        if let Some(max) = self.max
            && value > max
        {
            value = max;
        }
        value
    }
}

/// Ownership table for the two pickers, keyed by field. Widget
/// lifetime is bounded by the owning view: mounted on construction and
/// on every structural re-render, destroyed (slots nulled) on
/// teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerPair {
    date_from: Option<DatePicker>,
    date_to: Option<DatePicker>,
}

impl PickerPair {
    pub fn mount(draft: &EventDraft, now: OffsetDateTime) -> Self {
        Self {
            date_from: Some(DatePicker::mount(PickerField::DateFrom, draft, now)),
            date_to: Some(DatePicker::mount(PickerField::DateTo, draft, now)),
        }
    }

    /// Destroys and re-creates both pickers with bounds refreshed from
    /// the draft.
    pub fn remount(&mut self, draft: &EventDraft, now: OffsetDateTime) {
        self.destroy_all();
        *self = Self::mount(draft, now);
    }

    pub fn destroy_all(&mut self) {
        self.date_from = None;
        self.date_to = None;
    }

    pub fn picker(&self, field: PickerField) -> Option<&DatePicker> {
        match field {
            PickerField::DateFrom => self.date_from.as_ref(),
            PickerField::DateTo => self.date_to.as_ref(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.date_from.is_some() && self.date_to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{PickerField, PickerPair};
    use crate::{DraftPatch, EventDraft, EventId, EventType, TripEvent};
    use time::macros::datetime;

    fn sample_draft() -> EventDraft {
        EventDraft::from_event(&TripEvent {
            id: EventId::new("e1"),
            event_type: EventType::Drive,
            destination_id: None,
            date_from: Some(datetime!(2024-03-18 10:00 UTC)),
            date_to: Some(datetime!(2024-03-20 12:00 UTC)),
            base_price: 0,
            offer_ids: Vec::new(),
            is_favorite: false,
        })
    }

    #[test]
    fn mounted_pair_cross_binds_limits() {
        let draft = sample_draft();
        let pair = PickerPair::mount(&draft, datetime!(2024-01-01 00:00 UTC));

        let start = pair.picker(PickerField::DateFrom).expect("start mounted");
        let end = pair.picker(PickerField::DateTo).expect("end mounted");

        assert_eq!(start.effective_max(), draft.date_to);
        assert_eq!(start.effective_min(), None);
        assert_eq!(end.effective_min(), draft.date_from);
        assert_eq!(end.effective_max(), None);
    }

    #[test]
    fn unset_dates_default_to_now() {
        let mut draft = sample_draft();
        draft.date_from = None;
        draft.date_to = None;
        let now = datetime!(2024-06-01 08:00 UTC);
        let pair = PickerPair::mount(&draft, now);

        assert_eq!(
            pair.picker(PickerField::DateFrom)
                .map(|picker| picker.default_value()),
            Some(now)
        );
        assert_eq!(
            pair.picker(PickerField::DateTo)
                .map(|picker| picker.default_value()),
            Some(now)
        );
    }

    #[test]
    fn remount_refreshes_bounds_after_date_change() {
        let mut draft = sample_draft();
        let now = datetime!(2024-01-01 00:00 UTC);
        let mut pair = PickerPair::mount(&draft, now);

        let new_from = datetime!(2024-03-19 09:00 UTC);
        draft.apply(DraftPatch::SetDateFrom(new_from));
        pair.remount(&draft, now);

        let end = pair.picker(PickerField::DateTo).expect("end mounted");
        assert_eq!(end.effective_min(), Some(new_from));

        let new_to = datetime!(2024-03-21 09:00 UTC);
        draft.apply(DraftPatch::SetDateTo(new_to));
        pair.remount(&draft, now);

        let start = pair.picker(PickerField::DateFrom).expect("start mounted");
        assert_eq!(start.effective_max(), Some(new_to));
    }

    #[test]
    fn clamp_folds_candidates_into_bounds() {
        let draft = sample_draft();
        let pair = PickerPair::mount(&draft, datetime!(2024-01-01 00:00 UTC));

        let start = *pair.picker(PickerField::DateFrom).expect("start mounted");
        assert_eq!(
            start.clamp(datetime!(2024-03-25 00:00 UTC)),
            datetime!(2024-03-20 12:00 UTC)
        );

        let end = *pair.picker(PickerField::DateTo).expect("end mounted");
        assert_eq!(
            end.clamp(datetime!(2024-03-01 00:00 UTC)),
            datetime!(2024-03-18 10:00 UTC)
        );
        assert_eq!(
            end.clamp(datetime!(2024-03-19 00:00 UTC)),
            datetime!(2024-03-19 00:00 UTC)
        );
    }

    #[test]
    fn destroy_nulls_both_slots() {
        let draft = sample_draft();
        let mut pair = PickerPair::mount(&draft, datetime!(2024-01-01 00:00 UTC));
        assert!(pair.is_mounted());

        pair.destroy_all();
        assert!(!pair.is_mounted());
        assert!(pair.picker(PickerField::DateFrom).is_none());
        assert!(pair.picker(PickerField::DateTo).is_none());
    }
}
