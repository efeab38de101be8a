// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Top-level planner state: which pane has focus and which card is
//! selected. Commands mutate the state and report what changed so the
//! shell only redraws (and re-mounts views) when something did.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlannerMode {
    #[default]
    Browse,
    Edit,
}

impl PlannerMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Browse => "Browse",
            Self::Edit => "Edit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerCommand {
    SelectNext,
    SelectPrev,
    OpenEditor,
    CloseEditor,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerEvent {
    ModeChanged,
    SelectionChanged,
    StatusUpdated,
    StatusCleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlannerState {
    pub mode: PlannerMode,
    pub selected: usize,
    pub status_line: Option<String>,
}

impl PlannerState {
    pub fn dispatch(&mut self, command: PlannerCommand, event_count: usize) -> Vec<PlannerEvent> {
        let mut events = Vec::new();
        match command {
            PlannerCommand::SelectNext => {
                if self.mode == PlannerMode::Browse && event_count > 0 {
                    self.selected = (self.selected + 1) % event_count;
                    events.push(PlannerEvent::SelectionChanged);
                }
            }
            PlannerCommand::SelectPrev => {
                if self.mode == PlannerMode::Browse && event_count > 0 {
                    self.selected = (self.selected + event_count - 1) % event_count;
                    events.push(PlannerEvent::SelectionChanged);
                }
            }
            PlannerCommand::OpenEditor => {
                if self.mode == PlannerMode::Browse && event_count > 0 {
                    self.mode = PlannerMode::Edit;
                    events.push(PlannerEvent::ModeChanged);
                }
            }
            PlannerCommand::CloseEditor => {
                if self.mode == PlannerMode::Edit {
                    self.mode = PlannerMode::Browse;
                    events.push(PlannerEvent::ModeChanged);
                }
            }
            PlannerCommand::SetStatus(message) => {
                self.status_line = Some(message);
                events.push(PlannerEvent::StatusUpdated);
            }
            PlannerCommand::ClearStatus => {
                if self.status_line.take().is_some() {
                    events.push(PlannerEvent::StatusCleared);
                }
            }
        }
        events
    }

    /// Keeps the selection valid after the event list shrinks.
    pub fn clamp_selection(&mut self, event_count: usize) {
        if event_count == 0 {
            self.selected = 0;
        } else if self.selected >= event_count {
            self.selected = event_count - 1;
        }
    }
}
