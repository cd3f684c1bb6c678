//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose session-scoped planner operations to Dart via FRB.
//! - Translate core results into flat response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Each UI session works on its own store; ids come from `session_open`.

use log::warn;
use mealcal_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, DateKey, MealPlan,
    MealType, Notice, PlannerSessions, SessionId, SessionPlanner,
};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use uuid::Uuid;

static SESSIONS: Lazy<Mutex<PlannerSessions>> = Lazy::new(|| Mutex::new(PlannerSessions::new()));

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Opens a planner session with an empty store.
///
/// Returns the session id used by every other planner call.
#[flutter_rust_bridge::frb(sync)]
pub fn session_open() -> String {
    match SESSIONS.lock() {
        Ok(mut sessions) => sessions.open().to_string(),
        Err(_) => {
            warn!("event=session_open module=ffi status=error reason=lock_poisoned");
            String::new()
        }
    }
}

/// Closes a session and drops its plans. Returns `false` for unknown ids.
#[flutter_rust_bridge::frb(sync)]
pub fn session_close(session_id: String) -> bool {
    let Ok(id) = parse_session_id(&session_id) else {
        return false;
    };
    SESSIONS
        .lock()
        .map(|mut sessions| sessions.close(id))
        .unwrap_or(false)
}

/// One calendar cell for grid rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCellItem {
    /// Day number; `None` for padding cells.
    pub day: Option<u32>,
    /// Date label (`M/D/YYYY`) for in-month cells.
    pub date: Option<String>,
    /// Whether a plan is saved for this date.
    pub highlighted: bool,
}

/// Month grid response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonthResponse {
    pub ok: bool,
    /// e.g. `January 2024`; empty on failure.
    pub title: String,
    /// Monday-first column headers.
    pub weekday_names: Vec<String>,
    /// Week rows of exactly seven cells.
    pub weeks: Vec<Vec<CalendarCellItem>>,
    pub message: String,
}

impl CalendarMonthResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            title: String::new(),
            weekday_names: Vec::new(),
            weeks: Vec::new(),
            message: message.into(),
        }
    }
}

/// One meal line of a date plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealItem {
    /// Meal label (`Breakfast|Lunch|Snacks|Dinner`).
    pub meal: String,
    /// Entered text; `None` when nothing was entered.
    pub text: Option<String>,
}

/// Date plan response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanResponse {
    pub ok: bool,
    pub date: String,
    pub has_entry: bool,
    /// Always four items in display order on success.
    pub meals: Vec<MealItem>,
    pub message: String,
}

/// Save/delete action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanActionResponse {
    /// Whether the action succeeded.
    pub ok: bool,
    /// User-facing notice text.
    pub message: String,
}

impl PlanActionResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

impl From<Notice> for PlanActionResponse {
    fn from(notice: Notice) -> Self {
        Self {
            ok: notice.is_success(),
            message: notice.message,
        }
    }
}

/// Lays out a month grid with highlight flags from the session store.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Invalid month or unknown session yields `ok=false` with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_month(session_id: String, year: i32, month: u32) -> CalendarMonthResponse {
    let result = with_session(&session_id, |planner| {
        planner
            .month_view(year, month)
            .map_err(|err| err.to_string())
    })
    .and_then(|view| view);

    match result {
        Ok(view) => CalendarMonthResponse {
            ok: true,
            title: view.title,
            weekday_names: view.weekday_names.iter().map(|name| name.to_string()).collect(),
            weeks: view
                .weeks
                .iter()
                .map(|week| {
                    week.iter()
                        .map(|cell| CalendarCellItem {
                            day: cell.day(),
                            date: cell.date.map(|date| date.to_string()),
                            highlighted: cell.has_entry,
                        })
                        .collect()
                })
                .collect(),
            message: String::new(),
        },
        Err(err) => CalendarMonthResponse::failure(format!("calendar_month failed: {err}")),
    }
}

/// Lists selectable date labels for a month; empty for an invalid month.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_dates(year: i32, month: u32) -> Vec<String> {
    mealcal_core::month_dates(year, month)
        .map(|dates| dates.iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}

/// Reads the current plan of one date.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_get(session_id: String, date: String) -> PlanResponse {
    let result = parse_date(&date).and_then(|date| {
        with_session(&session_id, |planner| planner.plan_view(date))
    });

    match result {
        Ok(view) => PlanResponse {
            ok: true,
            date: view.date.to_string(),
            has_entry: view.has_entry,
            meals: view
                .meals
                .into_iter()
                .map(|line| MealItem {
                    meal: line.meal.label().to_string(),
                    text: line.text,
                })
                .collect(),
            message: String::new(),
        },
        Err(err) => PlanResponse {
            ok: false,
            date,
            has_entry: false,
            meals: Vec::new(),
            message: format!("plan_get failed: {err}"),
        },
    }
}

/// Saves the four meal inputs of a date.
///
/// Empty strings keep previously saved values.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_save(
    session_id: String,
    date: String,
    breakfast: String,
    lunch: String,
    snacks: String,
    dinner: String,
) -> PlanActionResponse {
    let input: MealPlan = [
        (MealType::Breakfast, breakfast),
        (MealType::Lunch, lunch),
        (MealType::Snacks, snacks),
        (MealType::Dinner, dinner),
    ]
    .into_iter()
    .map(|(meal, text)| (meal, text.trim().to_string()))
    .collect();

    run_action("plan_save", &session_id, &date, |planner, date| {
        planner.save_plan(date, &input)
    })
}

/// Deletes the whole plan of a date.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_delete(session_id: String, date: String) -> PlanActionResponse {
    run_action("plan_delete", &session_id, &date, |planner, date| {
        planner.delete_plan(date)
    })
}

/// Deletes one meal type from the plan of a date.
#[flutter_rust_bridge::frb(sync)]
pub fn plan_delete_meal(session_id: String, date: String, meal: String) -> PlanActionResponse {
    let meal = match meal.parse::<MealType>() {
        Ok(meal) => meal,
        Err(err) => return PlanActionResponse::failure(format!("plan_delete_meal failed: {err}")),
    };
    run_action("plan_delete_meal", &session_id, &date, |planner, date| {
        planner.delete_meal(date, meal)
    })
}

fn run_action(
    name: &str,
    session_id: &str,
    date: &str,
    f: impl FnOnce(&mut SessionPlanner, DateKey) -> Notice,
) -> PlanActionResponse {
    match parse_date(date).and_then(|date| with_session(session_id, |planner| f(planner, date))) {
        Ok(notice) => notice.into(),
        Err(err) => PlanActionResponse::failure(format!("{name} failed: {err}")),
    }
}

fn with_session<T>(
    session_id: &str,
    f: impl FnOnce(&mut SessionPlanner) -> T,
) -> Result<T, String> {
    let id = parse_session_id(session_id)?;
    let mut sessions = SESSIONS
        .lock()
        .map_err(|_| "session registry unavailable".to_string())?;
    let planner = sessions
        .get_mut(id)
        .ok_or_else(|| format!("unknown session `{id}`"))?;
    Ok(f(planner))
}

fn parse_session_id(value: &str) -> Result<SessionId, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("invalid session id `{}`", value.trim()))
}

fn parse_date(value: &str) -> Result<DateKey, String> {
    value.parse::<DateKey>().map_err(|err| err.to_string())
}
