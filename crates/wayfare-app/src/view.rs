// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! The two event views. Rather than inheriting from a shared stateful
//! base, each view composes a binding registry (listener bookkeeping)
//! with its own state, plus the picker pair in the editor's case;
//! owners drive them with typed inputs and match on the returned
//! outcome.

use time::OffsetDateTime;

use crate::model::{Destination, OfferGroup};
use crate::{
    DraftPatch, EventDraft, EventPayload, EventType, OfferId, PickerField, PickerPair, RenderEffect,
    TripEvent, destination_by_name, offers_for_type, render_event_card, render_event_editor,
};

/// One registered listener: which markup hook it attaches to and which
/// trigger it listens for. Teardown must release every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub hook: &'static str,
    pub trigger: &'static str,
}

/// Capability surface shared by both view variants.
pub trait ViewLifecycle {
    fn markup(&self, catalog: &[OfferGroup], destinations: &[Destination]) -> String;
    fn bindings(&self) -> &[Binding];
    /// Releases all registered listeners and any embedded widget
    /// resources.
    fn teardown(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardInput {
    RollupClicked,
    FavoriteClicked,
}

/// Card signals carry no payload; the owner knows which entity the
/// view was constructed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSignal {
    ExpandRequested,
    FavoriteToggled,
}

/// Read-only list-item view over an immutable event. Holds no
/// favorite state of its own; it only signals intent.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCardView {
    event: TripEvent,
    bindings: Vec<Binding>,
}

impl EventCardView {
    pub fn new(event: TripEvent) -> Self {
        Self {
            event,
            bindings: vec![
                Binding {
                    hook: ".event__rollup-btn",
                    trigger: "click",
                },
                Binding {
                    hook: ".event__favorite-btn",
                    trigger: "click",
                },
            ],
        }
    }

    pub fn event(&self) -> &TripEvent {
        &self.event
    }

    pub fn notify(&self, input: CardInput) -> CardSignal {
        match input {
            CardInput::RollupClicked => CardSignal::ExpandRequested,
            CardInput::FavoriteClicked => CardSignal::FavoriteToggled,
        }
    }
}

impl ViewLifecycle for EventCardView {
    fn markup(&self, catalog: &[OfferGroup], destinations: &[Destination]) -> String {
        render_event_card(&self.event, catalog, destinations)
    }

    fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    fn teardown(&mut self) {
        self.bindings.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditInput {
    TypeChosen(EventType),
    DestinationTyped(String),
    PriceTyped(String),
    OfferToggled { id: OfferId, checked: bool },
    DatePicked { field: PickerField, value: OffsetDateTime },
    SubmitRequested,
    DeleteRequested,
    CollapseRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The draft changed; the effect says whether the owner must
    /// redraw the whole fragment or may leave the markup alone.
    Updated(RenderEffect),
    Submit(EventPayload),
    Delete(EventPayload),
    Collapse(EventPayload),
}

/// Editable form view over a draft copy of an event. Mutating the
/// draft never touches the owner's entity; ownership of the edited
/// values passes back only through an [`EditOutcome`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventEditView {
    draft: EventDraft,
    pickers: PickerPair,
    bindings: Vec<Binding>,
}

impl EventEditView {
    pub fn new(event: &TripEvent, catalog: &[OfferGroup], now: OffsetDateTime) -> Self {
        let draft = EventDraft::from_event(event);
        let pickers = PickerPair::mount(&draft, now);
        let mut view = Self {
            draft,
            pickers,
            bindings: Vec::new(),
        };
        view.rebind(catalog);
        view
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn pickers(&self) -> &PickerPair {
        &self.pickers
    }

    /// Owner-driven transient flags; rendered as button labels only.
    pub fn set_saving(&mut self, saving: bool) {
        self.draft.is_saving = saving;
    }

    pub fn set_deleting(&mut self, deleting: bool) {
        self.draft.is_deleting = deleting;
    }

    /// Replaces the draft wholesale with a fresh copy and forces a
    /// structural remount.
    pub fn reset(&mut self, event: &TripEvent, catalog: &[OfferGroup], now: OffsetDateTime) {
        self.draft.reset(event);
        self.restructure(catalog, now);
    }

    pub fn handle(
        &mut self,
        input: EditInput,
        catalog: &[OfferGroup],
        destinations: &[Destination],
        now: OffsetDateTime,
    ) -> EditOutcome {
        match input {
            EditInput::TypeChosen(event_type) => {
                self.patch(DraftPatch::ChooseType(event_type), catalog, now)
            }
            EditInput::DestinationTyped(text) => {
                let matched = destination_by_name(destinations, &text)
                    .map(|destination| destination.id.clone());
                self.patch(DraftPatch::ChooseDestination(matched), catalog, now)
            }
            EditInput::PriceTyped(raw) => self.patch(DraftPatch::SetPrice(raw), catalog, now),
            EditInput::OfferToggled { id, checked } => {
                let patch = if checked {
                    DraftPatch::CheckOffer(id)
                } else {
                    DraftPatch::UncheckOffer(id)
                };
                self.patch(patch, catalog, now)
            }
            EditInput::DatePicked { field, value } => {
                let value = match self.pickers.picker(field) {
                    Some(picker) => picker.clamp(value),
                    None => value,
                };
                let patch = match field {
                    PickerField::DateFrom => DraftPatch::SetDateFrom(value),
                    PickerField::DateTo => DraftPatch::SetDateTo(value),
                };
                self.patch(patch, catalog, now)
            }
            EditInput::SubmitRequested => EditOutcome::Submit(self.draft.payload()),
            EditInput::DeleteRequested => EditOutcome::Delete(self.draft.payload()),
            EditInput::CollapseRequested => EditOutcome::Collapse(self.draft.payload()),
        }
    }

    fn patch(
        &mut self,
        patch: DraftPatch,
        catalog: &[OfferGroup],
        now: OffsetDateTime,
    ) -> EditOutcome {
        let effect = self.draft.apply(patch);
        if effect == RenderEffect::Structural {
            self.restructure(catalog, now);
        }
        EditOutcome::Updated(effect)
    }

    /// Full re-render path: re-registers handlers against the fresh
    /// markup and remounts both pickers with refreshed bounds.
    fn restructure(&mut self, catalog: &[OfferGroup], now: OffsetDateTime) {
        self.rebind(catalog);
        self.pickers.remount(&self.draft, now);
    }

    fn rebind(&mut self, catalog: &[OfferGroup]) {
        self.bindings.clear();
        self.bindings.push(Binding {
            hook: "form",
            trigger: "submit",
        });
        self.bindings.push(Binding {
            hook: ".event__rollup-btn",
            trigger: "click",
        });
        self.bindings.push(Binding {
            hook: ".event__type-group",
            trigger: "change",
        });
        if !offers_for_type(catalog, self.draft.event_type).is_empty() {
            self.bindings.push(Binding {
                hook: ".event__available-offers",
                trigger: "change",
            });
        }
        self.bindings.push(Binding {
            hook: ".event__input--destination",
            trigger: "change",
        });
        self.bindings.push(Binding {
            hook: ".event__input--price",
            trigger: "input",
        });
        self.bindings.push(Binding {
            hook: ".event__reset-btn",
            trigger: "click",
        });
    }
}

impl ViewLifecycle for EventEditView {
    fn markup(&self, catalog: &[OfferGroup], destinations: &[Destination]) -> String {
        render_event_editor(&self.draft, catalog, destinations)
    }

    fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    fn teardown(&mut self) {
        self.bindings.clear();
        self.pickers.destroy_all();
    }
}
