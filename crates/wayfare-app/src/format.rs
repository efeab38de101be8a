// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Date-time format shown inside the edit form inputs (`18/03/24 16:40`).
pub const EDIT_FORM_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year repr:last_two] [hour]:[minute]");

/// Machine-readable day stamp (`2024-03-18`).
pub const YEAR_MONTH_DAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Short human day label (`MAR 18`).
pub const DAY_MONTH_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day]");

/// Machine-readable timestamp for `datetime` attributes (`2024-03-18T16:40`).
pub const FULL_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// Clock time (`16:40`), 24-hour.
pub const HOURS_MINUTES_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]");

/// Formats an optional timestamp, rendering the missing case as an
/// empty string.
pub fn format_date(
    value: Option<OffsetDateTime>,
    format: &[BorrowedFormatItem<'static>],
) -> String {
    value
        .and_then(|value| value.format(&format).ok())
        .unwrap_or_default()
}

/// Human-readable span between two timestamps: `30M`, `02H 30M`, or
/// `01D 02H 30M` depending on magnitude. Unset endpoints read as an
/// empty duration.
pub fn format_duration(from: Option<OffsetDateTime>, to: Option<OffsetDateTime>) -> String {
    let (Some(from), Some(to)) = (from, to) else {
        return String::new();
    };

    let total_minutes = (to - from).whole_minutes().max(0);
    let minutes = total_minutes % 60;
    let hours = (total_minutes / 60) % 24;
    let days = total_minutes / (60 * 24);

    if days > 0 {
        format!("{days:02}D {hours:02}H {minutes:02}M")
    } else if hours > 0 {
        format!("{hours:02}H {minutes:02}M")
    } else {
        format!("{minutes:02}M")
    }
}
