// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;
use wayfare_app::{
    CardInput, CardSignal, DAY_MONTH_FORMAT, Destination, EDIT_FORM_FORMAT, EditInput, EditOutcome,
    EventCardView, EventEditView, EventId, EventPayload, HOURS_MINUTES_FORMAT, OfferGroup,
    PickerField, PlannerCommand, PlannerEvent, PlannerMode, PlannerState, TripEvent,
    ViewLifecycle, destination_by_id, format_date, format_duration, offers_for_type,
};

/// Backing store the planner talks to. The list pane and the editor
/// only ever see loaded snapshots; every mutation goes through here
/// and is followed by a reload.
pub trait PlannerRuntime {
    fn load_events(&mut self) -> Result<Vec<TripEvent>>;
    fn load_offer_catalog(&mut self) -> Result<Vec<OfferGroup>>;
    fn load_destinations(&mut self) -> Result<Vec<Destination>>;
    fn commit_event(&mut self, payload: &EventPayload) -> Result<TripEvent>;
    fn delete_event(&mut self, id: &EventId) -> Result<()>;
    fn toggle_favorite(&mut self, id: &EventId) -> Result<TripEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptTarget {
    Destination,
    Price,
}

impl PromptTarget {
    fn title(self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::Price => "price",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PromptUiState {
    target: PromptTarget,
    buffer: String,
}

/// Overlay for stepping one of the two date fields. `selected` starts
/// from the draft value (or the session clock) and is only committed
/// through the editor on Enter, so Esc leaves the draft untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DateOverlayUiState {
    visible: bool,
    field: Option<PickerField>,
    selected: Option<OffsetDateTime>,
}

#[derive(Debug, Default)]
struct ViewData {
    events: Vec<TripEvent>,
    catalog: Vec<OfferGroup>,
    destinations: Vec<Destination>,
    editor: Option<EventEditView>,
    date_overlay: DateOverlayUiState,
    prompt: Option<PromptUiState>,
    help_visible: bool,
    show_markup: bool,
    status_token: u64,
}

pub fn run_app<R: PlannerRuntime>(
    state: &mut PlannerState,
    runtime: &mut R,
    show_markup: bool,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        show_markup,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(state, runtime, &mut view_data) {
        state.dispatch(PlannerCommand::SetStatus(format!("load failed: {error}")), 0);
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    let now = OffsetDateTime::now_utc();
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key, now) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut PlannerState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    let event_count = view_data.events.len();
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(PlannerCommand::ClearStatus, event_count);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut PlannerState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    let event_count = view_data.events.len();
    state.dispatch(PlannerCommand::SetStatus(message.into()), event_count);
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn refresh_view_data<R: PlannerRuntime>(
    state: &mut PlannerState,
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Result<()> {
    view_data.events = runtime.load_events().context("load events")?;
    view_data.catalog = runtime.load_offer_catalog().context("load offer catalog")?;
    view_data.destinations = runtime.load_destinations().context("load destinations")?;
    state.clamp_selection(view_data.events.len());
    Ok(())
}

fn handle_key_event<R: PlannerRuntime>(
    state: &mut PlannerState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
    now: OffsetDateTime,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.date_overlay.visible {
        handle_date_overlay_key(state, view_data, internal_tx, key, now);
        return false;
    }

    if view_data.prompt.is_some() {
        handle_prompt_key(state, view_data, internal_tx, key, now);
        return false;
    }

    match state.mode {
        PlannerMode::Browse => handle_browse_key(state, runtime, view_data, internal_tx, key, now),
        PlannerMode::Edit => handle_edit_key(state, runtime, view_data, internal_tx, key, now),
    }
}

fn handle_browse_key<R: PlannerRuntime>(
    state: &mut PlannerState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
    now: OffsetDateTime,
) -> bool {
    let event_count = view_data.events.len();
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => {
            state.dispatch(PlannerCommand::SelectNext, event_count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.dispatch(PlannerCommand::SelectPrev, event_count);
        }
        KeyCode::Enter => {
            let events = state.dispatch(PlannerCommand::OpenEditor, event_count);
            if events.contains(&PlannerEvent::ModeChanged)
                && let Some(event) = view_data.events.get(state.selected)
            {
                view_data.editor = Some(EventEditView::new(event, &view_data.catalog, now));
            }
        }
        KeyCode::Char('f') => {
            let Some(event) = view_data.events.get(state.selected) else {
                return false;
            };
            // The card only signals; the actual flip happens in the
            // runtime, outside the view.
            let card = EventCardView::new(event.clone());
            if card.notify(CardInput::FavoriteClicked) == CardSignal::FavoriteToggled {
                let id = event.id.clone();
                match runtime.toggle_favorite(&id) {
                    Ok(updated) => {
                        let label = if updated.is_favorite {
                            "marked favorite"
                        } else {
                            "unmarked favorite"
                        };
                        if let Err(error) = refresh_view_data(state, runtime, view_data) {
                            emit_status(
                                state,
                                view_data,
                                internal_tx,
                                format!("reload failed: {error}"),
                            );
                        } else {
                            emit_status(state, view_data, internal_tx, label);
                        }
                    }
                    Err(error) => {
                        emit_status(
                            state,
                            view_data,
                            internal_tx,
                            format!("favorite failed: {error}"),
                        );
                    }
                }
            }
        }
        KeyCode::Char('?') => view_data.help_visible = true,
        _ => {}
    }
    false
}

fn handle_edit_key<R: PlannerRuntime>(
    state: &mut PlannerState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
    now: OffsetDateTime,
) -> bool {
    match key.code {
        KeyCode::Char('t') => {
            if let Some(editor) = view_data.editor.as_mut() {
                let next = editor.draft().event_type.next();
                editor.handle(
                    EditInput::TypeChosen(next),
                    &view_data.catalog,
                    &view_data.destinations,
                    now,
                );
            }
        }
        KeyCode::Char(digit @ '1'..='9') => {
            toggle_offer_by_index(view_data, digit as usize - '1' as usize, now);
        }
        KeyCode::Char('d') => {
            view_data.prompt = Some(PromptUiState {
                target: PromptTarget::Destination,
                buffer: String::new(),
            });
        }
        KeyCode::Char('p') => {
            let buffer = view_data
                .editor
                .as_ref()
                .map(|editor| editor.draft().base_price.clone())
                .unwrap_or_default();
            view_data.prompt = Some(PromptUiState {
                target: PromptTarget::Price,
                buffer,
            });
        }
        KeyCode::Char('[') => open_date_overlay(view_data, PickerField::DateFrom, now),
        KeyCode::Char(']') => open_date_overlay(view_data, PickerField::DateTo, now),
        KeyCode::Char('s') => submit_editor(state, runtime, view_data, internal_tx, now),
        KeyCode::Char('x') => delete_from_editor(state, runtime, view_data, internal_tx, now),
        KeyCode::Esc => collapse_editor(state, view_data, internal_tx, now),
        KeyCode::Char('?') => view_data.help_visible = true,
        _ => {}
    }
    false
}

fn toggle_offer_by_index(view_data: &mut ViewData, index: usize, now: OffsetDateTime) {
    let Some(editor) = view_data.editor.as_mut() else {
        return;
    };
    let available = offers_for_type(&view_data.catalog, editor.draft().event_type);
    let Some(offer) = available.get(index) else {
        return;
    };
    let checked = !editor.draft().offer_ids.contains(&offer.id);
    editor.handle(
        EditInput::OfferToggled {
            id: offer.id.clone(),
            checked,
        },
        &view_data.catalog,
        &view_data.destinations,
        now,
    );
}

fn open_date_overlay(view_data: &mut ViewData, field: PickerField, now: OffsetDateTime) {
    let Some(editor) = view_data.editor.as_ref() else {
        return;
    };
    let selected = editor
        .pickers()
        .picker(field)
        .map(|picker| picker.default_value())
        .unwrap_or(now);
    view_data.date_overlay = DateOverlayUiState {
        visible: true,
        field: Some(field),
        selected: Some(selected),
    };
}

fn handle_date_overlay_key(
    state: &mut PlannerState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
    now: OffsetDateTime,
) {
    let (Some(field), Some(current)) = (view_data.date_overlay.field, view_data.date_overlay.selected)
    else {
        view_data.date_overlay = DateOverlayUiState::default();
        return;
    };

    let next = match key.code {
        KeyCode::Esc => {
            view_data.date_overlay = DateOverlayUiState::default();
            emit_status(state, view_data, internal_tx, "date edit canceled");
            return;
        }
        KeyCode::Enter => {
            view_data.date_overlay = DateOverlayUiState::default();
            if let Some(editor) = view_data.editor.as_mut() {
                editor.handle(
                    EditInput::DatePicked {
                        field,
                        value: current,
                    },
                    &view_data.catalog,
                    &view_data.destinations,
                    now,
                );
            }
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("{} picked", field.label()),
            );
            return;
        }
        KeyCode::Char('h') | KeyCode::Left => shift_by_days(current, -1),
        KeyCode::Char('l') | KeyCode::Right => shift_by_days(current, 1),
        KeyCode::Char('j') | KeyCode::Down => shift_by_days(current, 7),
        KeyCode::Char('k') | KeyCode::Up => shift_by_days(current, -7),
        KeyCode::Char('H') => shift_by_months(current, -1),
        KeyCode::Char('L') => shift_by_months(current, 1),
        KeyCode::Char('[') => shift_by_months(current, -12),
        KeyCode::Char(']') => shift_by_months(current, 12),
        KeyCode::Char('+') => shift_by_minutes(current, 60),
        KeyCode::Char('-') => shift_by_minutes(current, -60),
        KeyCode::Char('<') => shift_by_minutes(current, -5),
        KeyCode::Char('>') => shift_by_minutes(current, 5),
        _ => None,
    };

    if let Some(value) = next {
        view_data.date_overlay.selected = Some(value);
    }
}

fn shift_by_days(value: OffsetDateTime, days: i64) -> Option<OffsetDateTime> {
    value.checked_add(time::Duration::days(days))
}

fn shift_by_minutes(value: OffsetDateTime, minutes: i64) -> Option<OffsetDateTime> {
    value.checked_add(time::Duration::minutes(minutes))
}

fn shift_by_months(value: OffsetDateTime, months: i32) -> Option<OffsetDateTime> {
    let date = value.date();
    let base_month = i32::from(date.month() as u8);
    let total_month = base_month - 1 + months;
    let year = date.year() + total_month.div_euclid(12);
    let month_number = (total_month.rem_euclid(12) + 1) as u8;
    let month = time::Month::try_from(month_number).ok()?;
    let max_day = last_day_of_month(year, month)?;
    let day = date.day().min(max_day);
    let shifted = time::Date::from_calendar_date(year, month, day).ok()?;
    Some(value.replace_date(shifted))
}

fn last_day_of_month(year: i32, month: time::Month) -> Option<u8> {
    let (next_year, next_month) = if month == time::Month::December {
        (year + 1, time::Month::January)
    } else {
        let next = time::Month::try_from((month as u8) + 1).ok()?;
        (year, next)
    };

    let first_next_month = time::Date::from_calendar_date(next_year, next_month, 1).ok()?;
    let last = first_next_month - time::Duration::days(1);
    Some(last.day())
}

fn handle_prompt_key(
    state: &mut PlannerState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
    now: OffsetDateTime,
) {
    let Some(prompt) = view_data.prompt.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            view_data.prompt = None;
        }
        KeyCode::Backspace => {
            prompt.buffer.pop();
        }
        KeyCode::Char(character) => {
            prompt.buffer.push(character);
        }
        KeyCode::Enter => {
            let Some(PromptUiState { target, buffer }) = view_data.prompt.take() else {
                return;
            };
            let Some(editor) = view_data.editor.as_mut() else {
                return;
            };
            let input = match target {
                PromptTarget::Destination => EditInput::DestinationTyped(buffer.clone()),
                PromptTarget::Price => EditInput::PriceTyped(buffer.clone()),
            };
            editor.handle(input, &view_data.catalog, &view_data.destinations, now);
            if target == PromptTarget::Destination
                && view_data
                    .editor
                    .as_ref()
                    .is_some_and(|editor| editor.draft().destination_id.is_none())
            {
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("no destination named {buffer:?}"),
                );
            }
        }
        _ => {}
    }
}

fn submit_editor<R: PlannerRuntime>(
    state: &mut PlannerState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    now: OffsetDateTime,
) {
    let Some(editor) = view_data.editor.as_mut() else {
        return;
    };
    editor.set_saving(true);
    let outcome = editor.handle(
        EditInput::SubmitRequested,
        &view_data.catalog,
        &view_data.destinations,
        now,
    );
    let EditOutcome::Submit(payload) = outcome else {
        return;
    };

    match runtime.commit_event(&payload) {
        Ok(_) => {
            close_editor(state, view_data);
            if let Err(error) = refresh_view_data(state, runtime, view_data) {
                emit_status(state, view_data, internal_tx, format!("reload failed: {error}"));
            } else {
                emit_status(state, view_data, internal_tx, "event saved");
            }
        }
        Err(error) => {
            if let Some(editor) = view_data.editor.as_mut() {
                editor.set_saving(false);
            }
            emit_status(state, view_data, internal_tx, format!("save failed: {error:#}"));
        }
    }
}

fn delete_from_editor<R: PlannerRuntime>(
    state: &mut PlannerState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    now: OffsetDateTime,
) {
    let Some(editor) = view_data.editor.as_mut() else {
        return;
    };
    editor.set_deleting(true);
    let outcome = editor.handle(
        EditInput::DeleteRequested,
        &view_data.catalog,
        &view_data.destinations,
        now,
    );
    let EditOutcome::Delete(payload) = outcome else {
        return;
    };

    match runtime.delete_event(&payload.id) {
        Ok(()) => {
            close_editor(state, view_data);
            if let Err(error) = refresh_view_data(state, runtime, view_data) {
                emit_status(state, view_data, internal_tx, format!("reload failed: {error}"));
            } else {
                emit_status(state, view_data, internal_tx, "event deleted");
            }
        }
        Err(error) => {
            if let Some(editor) = view_data.editor.as_mut() {
                editor.set_deleting(false);
            }
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("delete failed: {error:#}"),
            );
        }
    }
}

fn collapse_editor(
    state: &mut PlannerState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    now: OffsetDateTime,
) {
    let Some(editor) = view_data.editor.as_mut() else {
        return;
    };
    // The collapse payload is deliberately dropped; unsaved edits do
    // not outlive the editor.
    let _ = editor.handle(
        EditInput::CollapseRequested,
        &view_data.catalog,
        &view_data.destinations,
        now,
    );
    close_editor(state, view_data);
    emit_status(state, view_data, internal_tx, "edits discarded");
}

fn close_editor(state: &mut PlannerState, view_data: &mut ViewData) {
    if let Some(mut editor) = view_data.editor.take() {
        editor.teardown();
    }
    view_data.date_overlay = DateOverlayUiState::default();
    view_data.prompt = None;
    state.dispatch(PlannerCommand::CloseEditor, view_data.events.len());
}

fn render(frame: &mut ratatui::Frame<'_>, state: &PlannerState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text(state, view_data))
        .block(Block::default().title("wayfare").borders(Borders::ALL))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(header, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[1]);

    let list = Paragraph::new(render_event_list_text(state, view_data))
        .block(Block::default().title("events").borders(Borders::ALL));
    frame.render_widget(list, body[0]);

    let (pane_text, pane_title) = if view_data.show_markup {
        (render_markup_text(state, view_data), markup_pane_title(state))
    } else {
        (render_detail_text(state, view_data), "details")
    };
    let pane = Paragraph::new(pane_text)
        .block(Block::default().title(pane_title).borders(Borders::ALL));
    frame.render_widget(pane, body[1]);

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if view_data.date_overlay.visible {
        let area = centered_rect(48, 30, frame.area());
        frame.render_widget(Clear, area);
        let picker = Paragraph::new(render_date_overlay_text(&view_data.date_overlay))
            .block(Block::default().title("date").borders(Borders::ALL));
        frame.render_widget(picker, area);
    }

    if let Some(prompt) = &view_data.prompt {
        let area = centered_rect(60, 20, frame.area());
        frame.render_widget(Clear, area);
        let body = Paragraph::new(format!("{}> {}", prompt.target.title(), prompt.buffer))
            .block(Block::default().title("input").borders(Borders::ALL));
        frame.render_widget(body, area);
    }

    if view_data.help_visible {
        let area = centered_rect(80, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn header_text(state: &PlannerState, view_data: &ViewData) -> String {
    format!(
        "{} | {} events",
        state.mode.label(),
        view_data.events.len()
    )
}

fn render_event_list_text(state: &PlannerState, view_data: &ViewData) -> String {
    if view_data.events.is_empty() {
        return "no events loaded".to_owned();
    }

    view_data
        .events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let marker = if index == state.selected { ">" } else { " " };
            let favorite = if event.is_favorite { "*" } else { " " };
            let destination = destination_by_id(&view_data.destinations, event.destination_id.as_ref())
                .map(|destination| destination.name.as_str())
                .unwrap_or("");
            format!(
                "{marker}{favorite} {} {} {} {} ({})",
                format_date(event.date_from, DAY_MONTH_FORMAT),
                event.event_type.label(),
                destination,
                format_date(event.date_from, HOURS_MINUTES_FORMAT),
                format_duration(event.date_from, event.date_to),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_markup_text(state: &PlannerState, view_data: &ViewData) -> String {
    if let Some(editor) = &view_data.editor {
        return editor.markup(&view_data.catalog, &view_data.destinations);
    }
    let Some(event) = view_data.events.get(state.selected) else {
        return String::new();
    };
    EventCardView::new(event.clone()).markup(&view_data.catalog, &view_data.destinations)
}

fn render_detail_text(state: &PlannerState, view_data: &ViewData) -> String {
    let (event_type, destination_id, date_from, date_to, price, offer_ids) =
        if let Some(editor) = &view_data.editor {
            let draft = editor.draft();
            (
                draft.event_type,
                draft.destination_id.clone(),
                draft.date_from,
                draft.date_to,
                draft.base_price.clone(),
                draft.offer_ids.clone(),
            )
        } else if let Some(event) = view_data.events.get(state.selected) {
            (
                event.event_type,
                event.destination_id.clone(),
                event.date_from,
                event.date_to,
                event.base_price.to_string(),
                event.offer_ids.clone(),
            )
        } else {
            return String::new();
        };

    let destination = destination_by_id(&view_data.destinations, destination_id.as_ref())
        .map(|destination| destination.name.as_str())
        .unwrap_or("(none)");
    let offers = wayfare_app::selected_offers(&view_data.catalog, event_type, &offer_ids)
        .iter()
        .map(|offer| format!("  {} +{}", offer.title, offer.price))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "type: {}\ndestination: {destination}\nfrom: {}\nto: {}\nprice: {price}\noffers:\n{offers}",
        event_type.label(),
        format_date(date_from, EDIT_FORM_FORMAT),
        format_date(date_to, EDIT_FORM_FORMAT),
    )
}

fn markup_pane_title(state: &PlannerState) -> &'static str {
    match state.mode {
        PlannerMode::Browse => "card markup",
        PlannerMode::Edit => "editor markup",
    }
}

fn render_date_overlay_text(overlay: &DateOverlayUiState) -> String {
    let field = overlay
        .field
        .map(PickerField::label)
        .unwrap_or("date");
    let value = format_date(overlay.selected, EDIT_FORM_FORMAT);
    format!(
        "{field}: {value}\n\nh/l day | j/k week | H/L month | [/] year\n+/- hour | </> 5 min\nenter pick | esc cancel"
    )
}

fn status_text(state: &PlannerState, view_data: &ViewData) -> String {
    if view_data.help_visible || view_data.date_overlay.visible || view_data.prompt.is_some() {
        return String::new();
    }

    let default = match state.mode {
        PlannerMode::Browse => "j/k select | enter edit | f favorite | ? help | q quit",
        PlannerMode::Edit => {
            "t type | 1-9 offers | d dest | p price | [/] dates | s save | x delete | esc close"
        }
    };
    match &state.status_line {
        Some(status) => format!("{} | {status} | {default}", state.mode.label()),
        None => format!("{} | {default}", state.mode.label()),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help\n\
browse: j/k select | enter edit | f favorite | q quit\n\
edit: t cycle type | 1-9 toggle offer | d destination | p price | s save | x delete | esc close\n\
edit: [ start date | ] end date\n\
date: h/l day | j/k week | H/L month | [/] year | +/- hour | </> 5 min | enter pick | esc cancel\n\
prompt: type text | backspace erase | enter apply | esc cancel"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
