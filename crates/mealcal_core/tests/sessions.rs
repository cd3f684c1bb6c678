use mealcal_core::{DateKey, MealPlan, MealType, PlannerSessions};

#[test]
fn sessions_keep_independent_stores() {
    let mut sessions = PlannerSessions::new();
    let first = sessions.open();
    let second = sessions.open();
    assert_ne!(first, second);
    let d = DateKey::new(2024, 4, 1).unwrap();

    sessions
        .get_mut(first)
        .unwrap()
        .save_plan(d, &MealPlan::new().with(MealType::Lunch, "Ramen"));

    assert!(sessions.get(first).unwrap().has_entry(d));
    assert!(!sessions.get(second).unwrap().has_entry(d));
}

#[test]
fn closing_a_session_discards_its_plans() {
    let mut sessions = PlannerSessions::new();
    let id = sessions.open();
    let d = DateKey::new(2024, 4, 2).unwrap();
    sessions
        .get_mut(id)
        .unwrap()
        .save_plan(d, &MealPlan::new().with(MealType::Dinner, "Pizza"));

    assert!(sessions.close(id));
    assert!(sessions.get(id).is_none());
    assert!(!sessions.close(id));
    assert!(sessions.is_empty());

    let reopened = sessions.open();
    assert!(!sessions.get(reopened).unwrap().has_entry(d));
}
