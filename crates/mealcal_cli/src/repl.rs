//! Interactive planner session.
//!
//! # Responsibility
//! - Hold the selection state (month, date) and the unsaved meal drafts.
//! - Map typed commands onto planner service calls and re-render afterwards.
//!
//! # Invariants
//! - The selected date always lies in the selected month.
//! - Drafts are cleared on save and whenever the selection changes.

use crate::render;
use crate::{FIRST_YEAR, LAST_YEAR};
use log::debug;
use mealcal_core::{
    day_count, DateKey, MealPlan, MealType, PlannerError, PlannerResult, PlannerService,
    PlannerStore,
};

const HELP: &str = "\
Commands:
  month <year> <month>   select a month (years 2024-2028)
  date <day|M/D/YYYY>    select a date in the current month
  set <meal> <text>      stage text for breakfast|lunch|snacks|dinner
  save                   save staged texts (empty meals keep their saved value)
  delete [meal]          delete the date's plan, or one meal of it
  show                   print the calendar and the selected date's plan
  help                   print this help
  quit                   end the session (plans are discarded)
";

/// Result of handling one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Month { year: i32, month: u32 },
    Date(String),
    Set { meal: MealType, text: String },
    Save,
    Delete(Option<MealType>),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map(|(head, rest)| (head, rest.trim()))
        .unwrap_or((line, ""));

    let command = match head.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "month" => {
            let mut parts = rest.split_whitespace();
            let (Some(year), Some(month), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err("usage: month <year> <month>".to_string());
            };
            let year: i32 = year
                .parse()
                .map_err(|_| format!("`{year}` is not a year"))?;
            let month: u32 = month
                .parse()
                .map_err(|_| format!("`{month}` is not a month"))?;
            if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
                return Err(format!("year must be within {FIRST_YEAR}..={LAST_YEAR}"));
            }
            Command::Month { year, month }
        }
        "date" if !rest.is_empty() => Command::Date(rest.to_string()),
        "date" => return Err("usage: date <day|M/D/YYYY>".to_string()),
        "set" => {
            let (meal, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if meal.is_empty() {
                return Err("usage: set <meal> <text>".to_string());
            }
            let meal = meal.parse::<MealType>().map_err(|err| err.to_string())?;
            Command::Set {
                meal,
                text: text.trim().to_string(),
            }
        }
        "save" => Command::Save,
        "delete" if rest.is_empty() => Command::Delete(None),
        "delete" => Command::Delete(Some(
            rest.parse::<MealType>().map_err(|err| err.to_string())?,
        )),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}

/// One user's planner session; the store lives exactly as long as this value.
pub struct Session {
    planner: PlannerService<PlannerStore>,
    year: i32,
    month: u32,
    selected: DateKey,
    draft: MealPlan,
}

impl Session {
    /// Starts on January of the first selectable year with an empty store.
    pub fn new() -> PlannerResult<Self> {
        Ok(Self {
            planner: PlannerService::new(PlannerStore::new()),
            year: FIRST_YEAR,
            month: 1,
            selected: DateKey::new(FIRST_YEAR, 1, 1)?,
            draft: MealPlan::new(),
        })
    }

    /// Calendar of the selected month followed by the selected date's plan.
    pub fn overview(&self) -> PlannerResult<String> {
        let month = self.planner.month_view(self.year, self.month)?;
        let plan = self.planner.plan_view(self.selected);
        Ok(format!("{}\n{}", render::month(&month), render::plan(&plan)))
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Outcome::Print(String::new()),
            Err(message) => return Outcome::Print(format!("[error] {message}\n")),
        };
        debug!("event=cli_command module=cli command={}", command_name(&command));

        match self.execute(command) {
            Ok(Some(text)) => Outcome::Print(text),
            Ok(None) => Outcome::Quit,
            Err(err) => Outcome::Print(format!("[error] {err}\n")),
        }
    }

    fn execute(&mut self, command: Command) -> PlannerResult<Option<String>> {
        let text = match command {
            Command::Month { year, month } => {
                day_count(year, month)?;
                let first = DateKey::new(year, month, 1)?;
                self.year = year;
                self.month = month;
                self.selected = first;
                self.draft = MealPlan::new();
                self.overview()?
            }
            Command::Date(value) => {
                let date = self.resolve_date(&value)?;
                self.selected = date;
                self.draft = MealPlan::new();
                render::plan(&self.planner.plan_view(date))
            }
            Command::Set { meal, text } => {
                self.draft.set(meal, text);
                format!("{meal} staged for {}\n", self.selected)
            }
            Command::Save => {
                let input: MealPlan = MealType::ALL
                    .iter()
                    .map(|meal| (*meal, self.draft.get(*meal).unwrap_or_default()))
                    .collect();
                let notice = self.planner.save_plan(self.selected, &input);
                self.draft = MealPlan::new();
                format!("{}{}", render::notice(&notice), self.overview()?)
            }
            Command::Delete(None) => {
                let notice = self.planner.delete_plan(self.selected);
                format!("{}{}", render::notice(&notice), self.overview()?)
            }
            Command::Delete(Some(meal)) => {
                let notice = self.planner.delete_meal(self.selected, meal);
                format!("{}{}", render::notice(&notice), self.overview()?)
            }
            Command::Show => self.overview()?,
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(None),
        };
        Ok(Some(text))
    }

    fn resolve_date(&self, value: &str) -> PlannerResult<DateKey> {
        let date = match value.trim().parse::<u32>() {
            Ok(day) => DateKey::new(self.year, self.month, day)?,
            Err(_) => value.parse::<DateKey>()?,
        };
        if date.year() != self.year || date.month() != self.month {
            return Err(PlannerError::InvalidArgument(format!(
                "{date} is outside the selected month {}/{}",
                self.month, self.year
            )));
        }
        Ok(date)
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Month { .. } => "month",
        Command::Date(_) => "date",
        Command::Set { .. } => "set",
        Command::Save => "save",
        Command::Delete(_) => "delete",
        Command::Show => "show",
        Command::Help => "help",
        Command::Quit => "quit",
    }
}
