//! Calendar event sources backed by local files.
//!
//! - [`IcsSource`] reads a directory of `.ics` files (one or more events per
//!   file) or a single `.ics` file.
//! - [`JsonFileSource`] reads a JSON array of events:
//!   `[{"title": "Time Off", "isAllDay": true, "start": "2024-01-09", "end": "2024-01-10"}]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use icalendar::parser::{read_calendar, unfold, Component};
use icalendar::{CalendarDateTime, DatePerhapsTime};
use timeoff_engine::error::Result as EngineResult;
use timeoff_engine::source::sort_chronologically;
use timeoff_engine::{CalendarEvent, CalendarEventSource, EventWindow, TimeOffError};
use tracing::{debug, warn};

/// Pick a source for `path` based on whether it is a directory or its extension.
pub fn open(path: &Path) -> Result<Box<dyn CalendarEventSource>> {
    if !path.exists() {
        bail!("Calendar not found: {}", path.display());
    }
    if path.is_dir() {
        return Ok(Box::new(IcsSource::Directory(path.to_path_buf())));
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("ics") => Ok(Box::new(IcsSource::File(path.to_path_buf()))),
        Some("json") => Ok(Box::new(JsonFileSource(path.to_path_buf()))),
        _ => bail!(
            "Unsupported calendar file: {}. Expected a directory, .ics or .json",
            path.display()
        ),
    }
}

/// Events stored as iCalendar files.
#[derive(Debug, Clone)]
pub enum IcsSource {
    Directory(PathBuf),
    File(PathBuf),
}

impl IcsSource {
    fn files(&self) -> Result<Vec<PathBuf>> {
        match self {
            IcsSource::File(path) => Ok(vec![path.clone()]),
            IcsSource::Directory(dir) => {
                let mut files = Vec::new();
                let entries = fs::read_dir(dir)
                    .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
                for entry in entries {
                    let path = entry
                        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
                        .path();
                    if path.extension().is_some_and(|e| e == "ics") {
                        files.push(path);
                    }
                }
                files.sort();
                Ok(files)
            }
        }
    }

    fn load(&self) -> Result<Vec<CalendarEvent>> {
        let mut events = Vec::new();
        for path in self.files()? {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            let parsed = parse_ics(&content)
                .with_context(|| format!("Failed to parse calendar: {}", path.display()))?;
            if parsed.is_empty() {
                warn!(path = %path.display(), "no usable events in calendar file");
            }
            events.extend(parsed);
        }
        debug!(events = events.len(), "loaded ics events");
        Ok(events)
    }
}

impl CalendarEventSource for IcsSource {
    fn events(&self, window: &EventWindow) -> EngineResult<Vec<CalendarEvent>> {
        let events = self
            .load()
            .map_err(|e| TimeOffError::Source(format!("{e:#}")))?;
        Ok(within(events, window))
    }
}

/// Events stored as a JSON array of [`CalendarEvent`].
#[derive(Debug, Clone)]
pub struct JsonFileSource(pub PathBuf);

impl JsonFileSource {
    fn load(&self) -> Result<Vec<CalendarEvent>> {
        let content = fs::read_to_string(&self.0)
            .with_context(|| format!("Failed to read file: {}", self.0.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse events from {}", self.0.display()))
    }
}

impl CalendarEventSource for JsonFileSource {
    fn events(&self, window: &EventWindow) -> EngineResult<Vec<CalendarEvent>> {
        let events = self
            .load()
            .map_err(|e| TimeOffError::Source(format!("{e:#}")))?;
        Ok(within(events, window))
    }
}

fn within(events: Vec<CalendarEvent>, window: &EventWindow) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = events
        .into_iter()
        .filter(|e| window.admits(e))
        .collect();
    sort_chronologically(&mut events);
    events
}

/// Parse every VEVENT in an iCalendar document.
///
/// Events without a usable DTSTART are skipped.
///
/// # Errors
/// Fails when the document is not iCalendar or holds no complete component,
/// e.g. a file cut off before its `END` lines.
pub fn parse_ics(content: &str) -> Result<Vec<CalendarEvent>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| anyhow!(e))?;
    if calendar.components.is_empty() {
        bail!("no calendar components found");
    }
    Ok(calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(parse_vevent)
        .collect())
}

fn parse_vevent(vevent: &Component<'_>) -> Option<CalendarEvent> {
    let title = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_default();
    let start = DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?;
    let end = vevent
        .find_prop("DTEND")
        .and_then(|p| DatePerhapsTime::try_from(p).ok());

    let is_all_day = matches!(start, DatePerhapsTime::Date(_));
    let start = calendar_date(&start);
    let end = match end {
        // All-day DTEND is exclusive.
        Some(DatePerhapsTime::Date(d)) if d > start => d.pred_opt().unwrap_or(start),
        Some(DatePerhapsTime::Date(d)) if d == start => start,
        // Left inverted so the tracker rejects it.
        Some(DatePerhapsTime::Date(d)) => d,
        None => start,
        Some(timed) => calendar_date(&timed).max(start),
    };

    Some(CalendarEvent {
        title,
        is_all_day,
        start,
        end,
    })
}

fn calendar_date(value: &DatePerhapsTime) -> NaiveDate {
    match value {
        DatePerhapsTime::Date(d) => *d,
        DatePerhapsTime::DateTime(dt) => match dt {
            CalendarDateTime::Utc(dt) => dt.date_naive(),
            CalendarDateTime::Floating(naive) => naive.date(),
            CalendarDateTime::WithTimezone { date_time, .. } => date_time.date(),
        },
    }
}
