//! Plain-text rendering of planner views.

use mealcal_core::{MonthView, Notice, NoticeLevel, PlanView};
const CELL_WIDTH: usize = 5;

/// Month grid; saved dates carry a `*` marker.
pub fn month(view: &MonthView) -> String {
    let mut out = format!("Calendar for {}\n", view.title);
    for name in view.weekday_names {
        out.push_str(&format!("{:>width$}", &name[..3], width = CELL_WIDTH));
    }
    out.push('\n');

    for week in &view.weeks {
        for cell in week {
            match cell.day() {
                Some(day) => {
                    let marker = if cell.has_entry { '*' } else { ' ' };
                    out.push_str(&format!("{day:>width$}{marker}", width = CELL_WIDTH - 1));
                }
                None => out.push_str(&" ".repeat(CELL_WIDTH)),
            }
        }
        out.push('\n');
    }
    out
}

/// Current plan of the selected date.
pub fn plan(view: &PlanView) -> String {
    let mut out = format!("Meal Plan for {}\n", view.date);
    for line in &view.meals {
        out.push_str(&format!("  {line}\n"));
    }
    out
}

pub fn notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {notice}\n")
}
