use mealcal_core::{
    DateKey, MealPlan, MealType, NoticeLevel, PlannerService, PlannerStore, NO_MEAL_PLACEHOLDER,
};

fn service() -> PlannerService<PlannerStore> {
    PlannerService::new(PlannerStore::new())
}

#[test]
fn month_view_highlights_saved_dates_only() {
    let mut service = service();
    let saved = DateKey::new(2024, 1, 10).unwrap();
    service.save_plan(saved, &MealPlan::new().with(MealType::Dinner, "Stew"));
    let other_month = DateKey::new(2024, 2, 10).unwrap();
    service.save_plan(other_month, &MealPlan::new().with(MealType::Lunch, "Rice"));
    let other_year = DateKey::new(2025, 1, 10).unwrap();
    service.save_plan(other_year, &MealPlan::new());

    let view = service.month_view(2024, 1).unwrap();

    assert_eq!(view.title, "January 2024");
    assert_eq!(view.day_count, 31);
    assert_eq!(view.weekday_names[0], "Monday");
    let highlighted: Vec<DateKey> = view
        .weeks
        .iter()
        .flatten()
        .filter(|cell| cell.has_entry)
        .filter_map(|cell| cell.date)
        .collect();
    assert_eq!(highlighted, vec![saved]);
}

#[test]
fn month_view_padding_cells_have_no_date() {
    let view = service().month_view(2024, 9).unwrap();

    let first_week = &view.weeks[0];
    assert!(first_week[..6].iter().all(|cell| cell.date.is_none()));
    assert_eq!(first_week[6].day(), Some(1));
}

#[test]
fn month_view_rejects_invalid_month() {
    assert!(service().month_view(2024, 0).is_err());
}

#[test]
fn plan_view_shows_placeholder_for_missing_and_empty_meals() {
    let mut service = service();
    let d = DateKey::new(2024, 2, 14).unwrap();
    service.save_plan(
        d,
        &MealPlan::new()
            .with(MealType::Breakfast, "Pancakes")
            .with(MealType::Lunch, ""),
    );

    let view = service.plan_view(d);

    assert!(view.has_entry);
    let lines: Vec<String> = view.meals.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Breakfast: Pancakes".to_string(),
            format!("Lunch: {NO_MEAL_PLACEHOLDER}"),
            format!("Snacks: {NO_MEAL_PLACEHOLDER}"),
            format!("Dinner: {NO_MEAL_PLACEHOLDER}"),
        ]
    );
}

#[test]
fn save_reports_success_notice_with_date_label() {
    let mut service = service();
    let d = DateKey::new(2024, 3, 5).unwrap();

    let notice = service.save_plan(d, &MealPlan::new().with(MealType::Lunch, "Soup"));

    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Meal Plan for 3/5/2024 has been saved.");
}

#[test]
fn delete_plan_reports_success_then_error() {
    let mut service = service();
    let d = DateKey::new(2024, 3, 6).unwrap();
    service.save_plan(d, &MealPlan::new().with(MealType::Lunch, "Soup"));

    let first = service.delete_plan(d);
    assert!(first.is_success());
    assert_eq!(first.message, "Meal Plan for 3/6/2024 has been deleted.");

    let second = service.delete_plan(d);
    assert_eq!(second.level, NoticeLevel::Error);
    assert_eq!(second.message, "No meal plan found for 3/6/2024.");
    assert!(!service.has_entry(d));
}

#[test]
fn delete_meal_reports_success_then_error() {
    let mut service = service();
    let d = DateKey::new(2024, 3, 7).unwrap();
    service.save_plan(d, &MealPlan::new().with(MealType::Snacks, "Fruit"));

    let first = service.delete_meal(d, MealType::Snacks);
    assert!(first.is_success());
    assert_eq!(first.message, "Snacks meal for 3/7/2024 has been deleted.");

    let second = service.delete_meal(d, MealType::Snacks);
    assert_eq!(second.level, NoticeLevel::Error);
    assert_eq!(second.message, "No Snacks meal found for 3/7/2024.");
}

#[test]
fn dates_for_month_matches_day_count() {
    let dates = service().dates_for_month(2023, 2).unwrap();
    assert_eq!(dates.len(), 28);
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
}
