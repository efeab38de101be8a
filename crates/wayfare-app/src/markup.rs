// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Markup fragments for the two event views. Hook classes (`event__*`)
//! are a stable selector contract for owners and tests.

use crate::{
    DAY_MONTH_FORMAT, EDIT_FORM_FORMAT, EventDraft, EventType, FULL_DATE_FORMAT,
    HOURS_MINUTES_FORMAT, TripEvent, YEAR_MONTH_DAY_FORMAT, destination_by_id, escape_text,
    format_date, format_duration, offers_for_type, selected_offers,
};
use crate::model::{Destination, Offer, OfferGroup};

fn offer_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Read-only card for one list item.
pub fn render_event_card(
    event: &TripEvent,
    catalog: &[OfferGroup],
    destinations: &[Destination],
) -> String {
    let destination = destination_by_id(destinations, event.destination_id.as_ref());
    let destination_name = destination
        .map(|destination| escape_text(&destination.name))
        .unwrap_or_default();
    let type_name = event.event_type.as_str();

    let date_time = format_date(event.date_from, YEAR_MONTH_DAY_FORMAT);
    let date = format_date(event.date_from, DAY_MONTH_FORMAT);
    let full_date_start = format_date(event.date_from, FULL_DATE_FORMAT);
    let full_date_end = format_date(event.date_to, FULL_DATE_FORMAT);
    let start_time = format_date(event.date_from, HOURS_MINUTES_FORMAT);
    let end_time = format_date(event.date_to, HOURS_MINUTES_FORMAT);
    let duration = format_duration(event.date_from, event.date_to);

    let offer_items = selected_offers(catalog, event.event_type, &event.offer_ids)
        .iter()
        .map(|offer| {
            format!(
                "<li class=\"event__offer\">\
                 <span class=\"event__offer-title\">{title}</span>\
                 &plus;&euro;&nbsp;\
                 <span class=\"event__offer-price\">{price}</span>\
                 </li>",
                title = offer.title,
                price = offer.price,
            )
        })
        .collect::<Vec<String>>()
        .join("");

    let favorite_class = if event.is_favorite {
        " event__favorite-btn--active"
    } else {
        ""
    };

    format!(
        "<li class=\"trip-events__item\">\
         <div class=\"event\">\
         <time class=\"event__date\" datetime=\"{date_time}\">{date}</time>\
         <div class=\"event__type\">\
         <img class=\"event__type-icon\" width=\"42\" height=\"42\" src=\"img/icons/{type_name}.png\" alt=\"Event type icon\">\
         </div>\
         <h3 class=\"event__title\">{type_name} {destination_name}</h3>\
         <div class=\"event__schedule\">\
         <p class=\"event__time\">\
         <time class=\"event__start-time\" datetime=\"{full_date_start}\">{start_time}</time>\
         &mdash;\
         <time class=\"event__end-time\" datetime=\"{full_date_end}\">{end_time}</time>\
         </p>\
         <p class=\"event__duration\">{duration}</p>\
         </div>\
         <p class=\"event__price\">&euro;&nbsp;<span class=\"event__price-value\">{base_price}</span></p>\
         <ul class=\"event__selected-offers\">{offer_items}</ul>\
         <button class=\"event__favorite-btn{favorite_class}\" type=\"button\">\
         <span class=\"visually-hidden\">Add to favorite</span>\
         </button>\
         <button class=\"event__rollup-btn\" type=\"button\">\
         <span class=\"visually-hidden\">Open event</span>\
         </button>\
         </div>\
         </li>",
        base_price = event.base_price,
    )
}

fn type_list_markup(current: EventType) -> String {
    EventType::ALL
        .iter()
        .map(|event_type| {
            let name = event_type.as_str();
            let checked = if *event_type == current { " checked" } else { "" };
            format!(
                "<div class=\"event__type-item\">\
                 <input id=\"event-type-{name}-1\" class=\"event__type-input visually-hidden\" \
                 type=\"radio\" name=\"event-type\" value=\"{name}\"{checked}>\
                 <label class=\"event__type-label event__type-label--{name}\" \
                 for=\"event-type-{name}-1\">{name}</label>\
                 </div>"
            )
        })
        .collect::<Vec<String>>()
        .join("")
}

fn datalist_markup(destinations: &[Destination]) -> String {
    destinations
        .iter()
        .map(|destination| {
            format!(
                "<option value=\"{name}\"></option>",
                name = escape_text(&destination.name)
            )
        })
        .collect::<Vec<String>>()
        .join("")
}

fn offer_selector_markup(offer: &Offer, selection: &[crate::OfferId]) -> String {
    let slug = offer_slug(&offer.title);
    let checked = if selection.contains(&offer.id) {
        " checked"
    } else {
        ""
    };
    format!(
        "<div class=\"event__offer-selector\">\
         <input class=\"event__offer-checkbox visually-hidden\" \
         id=\"event-offer-{slug}-{id}\" type=\"checkbox\" \
         name=\"event-offer-{slug}\" data-id=\"{id}\"{checked}>\
         <label class=\"event__offer-label\" for=\"event-offer-{slug}-{id}\">\
         <span class=\"event__offer-title\">{title}</span>\
         &plus;&euro;&nbsp;\
         <span class=\"event__offer-price\">{price}</span>\
         </label>\
         </div>",
        id = offer.id,
        title = offer.title,
        price = offer.price,
    )
}

fn offers_section_markup(offers: &[Offer], selection: &[crate::OfferId]) -> String {
    if offers.is_empty() {
        return String::new();
    }

    let selectors = offers
        .iter()
        .map(|offer| offer_selector_markup(offer, selection))
        .collect::<Vec<String>>()
        .join("");

    format!(
        "<section class=\"event__section event__section--offers\">\
         <h3 class=\"event__section-title event__section-title--offers\">Offers</h3>\
         <div class=\"event__available-offers\">{selectors}</div>\
         </section>"
    )
}

fn destination_section_markup(destination: Option<&Destination>) -> String {
    let Some(destination) = destination else {
        return String::new();
    };
    if !destination.has_details() {
        return String::new();
    }

    let photos = if destination.pictures.is_empty() {
        String::new()
    } else {
        let tape = destination
            .pictures
            .iter()
            .map(|picture| {
                format!(
                    "<img class=\"event__photo\" src=\"{src}\" alt=\"{alt}\">",
                    src = picture.src,
                    alt = escape_text(&picture.description),
                )
            })
            .collect::<Vec<String>>()
            .join("");
        format!(
            "<div class=\"event__photos-container\"><div class=\"event__photos-tape\">{tape}</div></div>"
        )
    };

    format!(
        "<section class=\"event__section event__section--destination\">\
         <h3 class=\"event__section-title event__section-title--destination\">Destination</h3>\
         <p class=\"event__destination-description\">{description}</p>\
         {photos}\
         </section>",
        description = escape_text(&destination.description),
    )
}

/// Edit form for one list item, rendered from the draft.
pub fn render_event_editor(
    draft: &EventDraft,
    catalog: &[OfferGroup],
    destinations: &[Destination],
) -> String {
    let destination = destination_by_id(destinations, draft.destination_id.as_ref());
    let destination_name = destination
        .map(|destination| escape_text(&destination.name))
        .unwrap_or_default();
    let type_name = draft.event_type.as_str();
    let offers = offers_for_type(catalog, draft.event_type);

    let start_time = format_date(draft.date_from, EDIT_FORM_FORMAT);
    let end_time = format_date(draft.date_to, EDIT_FORM_FORMAT);

    let save_label = if draft.is_saving { "Saving..." } else { "Save" };
    let delete_label = if draft.is_deleting {
        "Deleting..."
    } else {
        "Delete"
    };

    format!(
        "<li class=\"trip-events__item\">\
         <form class=\"event event--edit\" action=\"#\" method=\"post\">\
         <header class=\"event__header\">\
         <div class=\"event__type-wrapper\">\
         <label class=\"event__type event__type-btn\" for=\"event-type-toggle-1\">\
         <span class=\"visually-hidden\">Choose event type</span>\
         <img class=\"event__type-icon\" width=\"17\" height=\"17\" src=\"img/icons/{type_name}.png\" alt=\"Event type icon\">\
         </label>\
         <input class=\"event__type-toggle visually-hidden\" id=\"event-type-toggle-1\" type=\"checkbox\">\
         <div class=\"event__type-list\">\
         <fieldset class=\"event__type-group\">\
         <legend class=\"visually-hidden\">Event type</legend>\
         {type_list}\
         </fieldset>\
         </div>\
         </div>\
         <div class=\"event__field-group event__field-group--destination\">\
         <label class=\"event__label event__type-output\" for=\"event-destination-1\">{type_name}</label>\
         <input class=\"event__input event__input--destination\" id=\"event-destination-1\" \
         type=\"text\" name=\"event-destination\" value=\"{destination_name}\" list=\"destination-list-1\">\
         <datalist id=\"destination-list-1\">{datalist}</datalist>\
         </div>\
         <div class=\"event__field-group event__field-group--time\">\
         <label class=\"visually-hidden\" for=\"event-start-time-1\">From</label>\
         <input class=\"event__input event__input--time\" id=\"event-start-time-1\" \
         type=\"text\" name=\"event-start-time\" value=\"{start_time}\">\
         &mdash;\
         <label class=\"visually-hidden\" for=\"event-end-time-1\">To</label>\
         <input class=\"event__input event__input--time\" id=\"event-end-time-1\" \
         type=\"text\" name=\"event-end-time\" value=\"{end_time}\">\
         </div>\
         <div class=\"event__field-group event__field-group--price\">\
         <label class=\"event__label\" for=\"event-price-1\">\
         <span class=\"visually-hidden\">Price</span>&euro;\
         </label>\
         <input class=\"event__input event__input--price\" id=\"event-price-1\" \
         type=\"text\" name=\"event-price\" value=\"{base_price}\">\
         </div>\
         <button class=\"event__save-btn btn btn--blue\" type=\"submit\">{save_label}</button>\
         <button class=\"event__reset-btn\" type=\"reset\">{delete_label}</button>\
         <button class=\"event__rollup-btn\" type=\"button\">\
         <span class=\"visually-hidden\">Open event</span>\
         </button>\
         </header>\
         <section class=\"event__details\">{offers_section}{destination_section}</section>\
         </form>\
         </li>",
        type_list = type_list_markup(draft.event_type),
        datalist = datalist_markup(destinations),
        base_price = escape_text(&draft.base_price),
        offers_section = offers_section_markup(offers, &draft.offer_ids),
        destination_section = destination_section_markup(destination),
    )
}

#[cfg(test)]
mod tests {
    use super::{render_event_card, render_event_editor};
    use crate::{
        Destination, DestinationId, EventDraft, EventId, EventType, Offer, OfferGroup, OfferId,
        Picture, TripEvent,
    };
    use time::macros::datetime;

    fn sample_destinations() -> Vec<Destination> {
        vec![
            Destination {
                id: DestinationId::new("d1"),
                name: "Geneva & Co".to_owned(),
                description: "Lakeside city.".to_owned(),
                pictures: vec![Picture {
                    src: "https://example.com/geneva.jpg".to_owned(),
                    description: "Lake view".to_owned(),
                }],
            },
            Destination {
                id: DestinationId::new("d2"),
                name: "Chamonix".to_owned(),
                description: String::new(),
                pictures: Vec::new(),
            },
        ]
    }

    fn sample_catalog() -> Vec<OfferGroup> {
        vec![OfferGroup {
            event_type: EventType::Flight,
            offers: vec![
                Offer {
                    id: OfferId::new("f1"),
                    title: "Add luggage".to_owned(),
                    price: 50,
                },
                Offer {
                    id: OfferId::new("f2"),
                    title: "Switch to comfort".to_owned(),
                    price: 80,
                },
            ],
        }]
    }

    fn sample_event(event_type: EventType) -> TripEvent {
        TripEvent {
            id: EventId::new("e1"),
            event_type,
            destination_id: Some(DestinationId::new("d1")),
            date_from: Some(datetime!(2024-03-18 10:00 UTC)),
            date_to: Some(datetime!(2024-03-18 12:30 UTC)),
            base_price: 160,
            offer_ids: vec![OfferId::new("f2")],
            is_favorite: true,
        }
    }

    #[test]
    fn card_escapes_destination_name() {
        let markup = render_event_card(
            &sample_event(EventType::Flight),
            &sample_catalog(),
            &sample_destinations(),
        );
        assert!(markup.contains("flight Geneva &amp; Co"));
        assert!(!markup.contains("Geneva & Co"));
    }

    #[test]
    fn card_with_unknown_destination_renders_empty_name() {
        let mut event = sample_event(EventType::Flight);
        event.destination_id = Some(DestinationId::new("nowhere"));
        let markup = render_event_card(&event, &sample_catalog(), &sample_destinations());
        assert!(markup.contains("<h3 class=\"event__title\">flight </h3>"));
    }

    #[test]
    fn card_lists_only_selected_offers() {
        let markup = render_event_card(
            &sample_event(EventType::Flight),
            &sample_catalog(),
            &sample_destinations(),
        );
        assert!(markup.contains("Switch to comfort"));
        assert!(!markup.contains("Add luggage"));
    }

    #[test]
    fn card_without_offer_group_renders_empty_offer_list() {
        let markup = render_event_card(
            &sample_event(EventType::Taxi),
            &sample_catalog(),
            &sample_destinations(),
        );
        assert!(markup.contains("<ul class=\"event__selected-offers\"></ul>"));
    }

    #[test]
    fn card_shows_duration_and_favorite_state() {
        let markup = render_event_card(
            &sample_event(EventType::Flight),
            &sample_catalog(),
            &sample_destinations(),
        );
        assert!(markup.contains("02H 30M"));
        assert!(markup.contains("event__favorite-btn--active"));
    }

    #[test]
    fn editor_checks_current_type_and_selected_offers() {
        let draft = EventDraft::from_event(&sample_event(EventType::Flight));
        let markup = render_event_editor(&draft, &sample_catalog(), &sample_destinations());
        assert!(markup.contains("value=\"flight\" checked"));
        assert!(markup.contains("data-id=\"f2\" checked"));
        assert!(markup.contains("data-id=\"f1\">"));
    }

    #[test]
    fn editor_omits_offers_section_for_type_without_offers() {
        let mut draft = EventDraft::from_event(&sample_event(EventType::Flight));
        draft.apply(crate::DraftPatch::ChooseType(EventType::Taxi));
        let markup = render_event_editor(&draft, &sample_catalog(), &sample_destinations());
        assert!(!markup.contains("event__section--offers"));
    }

    #[test]
    fn editor_omits_destination_section_without_details() {
        let mut draft = EventDraft::from_event(&sample_event(EventType::Flight));
        draft.apply(crate::DraftPatch::ChooseDestination(Some(
            DestinationId::new("d2"),
        )));
        let markup = render_event_editor(&draft, &sample_catalog(), &sample_destinations());
        assert!(!markup.contains("event__section--destination"));

        draft.apply(crate::DraftPatch::ChooseDestination(None));
        let markup = render_event_editor(&draft, &sample_catalog(), &sample_destinations());
        assert!(!markup.contains("event__section--destination"));
        assert!(markup.contains("value=\"\" list=\"destination-list-1\""));
    }

    #[test]
    fn editor_datalist_covers_all_destination_names() {
        let draft = EventDraft::from_event(&sample_event(EventType::Flight));
        let markup = render_event_editor(&draft, &sample_catalog(), &sample_destinations());
        assert!(markup.contains("<option value=\"Geneva &amp; Co\"></option>"));
        assert!(markup.contains("<option value=\"Chamonix\"></option>"));
    }

    #[test]
    fn editor_button_labels_track_ui_flags() {
        let mut draft = EventDraft::from_event(&sample_event(EventType::Flight));
        let markup = render_event_editor(&draft, &sample_catalog(), &sample_destinations());
        assert!(markup.contains(">Save</button>"));
        assert!(markup.contains(">Delete</button>"));

        draft.is_saving = true;
        draft.is_deleting = true;
        let markup = render_event_editor(&draft, &sample_catalog(), &sample_destinations());
        assert!(markup.contains(">Saving...</button>"));
        assert!(markup.contains(">Deleting...</button>"));
    }

    #[test]
    fn editor_renders_dates_in_edit_format() {
        let draft = EventDraft::from_event(&sample_event(EventType::Flight));
        let markup = render_event_editor(&draft, &sample_catalog(), &sample_destinations());
        assert!(markup.contains("value=\"18/03/24 10:00\""));
        assert!(markup.contains("value=\"18/03/24 12:30\""));
    }
}
