use minutas::{
    format_order, CatalogService, CatalogStore, SqliteStore, WeeklyAggregator, WeeklySchedule,
};

fn fixture() -> (SqliteStore, i64) {
    let store = SqliteStore::open_in_memory().unwrap();
    let service = CatalogService::new(&store);

    let arroz = service.create_food("Arroz").unwrap();
    let ahuyama = service.create_food("Ahuyama").unwrap();
    let center = service.create_center("Jardín Centro").unwrap();

    let m1 = service.create_menu("M1").unwrap();
    let m2 = service.create_menu("M2").unwrap();
    let m3 = service.create_menu("M3").unwrap();

    store.upsert_menu_ingredient(m1, arroz, 50.0, 70.0).unwrap();
    store.upsert_menu_ingredient(m2, arroz, 25.0, 30.0).unwrap();
    store.upsert_menu_ingredient(m1, ahuyama, 100.0, 120.0).unwrap();

    let schedule = WeeklySchedule::new(&store);
    schedule.assign(center, m1).unwrap();
    schedule.assign(center, m2).unwrap();
    schedule.assign(center, m3).unwrap();

    (store, center)
}

#[test]
fn test_weekly_order_unions_menus_and_scales_by_headcounts() {
    let (store, center) = fixture();

    let menu_ids: Vec<i64> = WeeklySchedule::new(&store)
        .list(center)
        .unwrap()
        .iter()
        .map(|a| a.menu_id)
        .collect();
    let totals = WeeklyAggregator::new(&store)
        .aggregate(&menu_ids, 10, 5)
        .unwrap();

    // Sorted by canonical food name: Ahuyama before Arroz.
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].food_name, "Ahuyama");
    assert_eq!(totals[1].food_name, "Arroz");

    let arroz = &totals[1];
    assert_eq!(arroz.sum_grams_g1, 75.0);
    assert_eq!(arroz.sum_grams_g2, 100.0);
    assert_eq!(arroz.total_g1, 750.0);
    assert_eq!(arroz.total_g2, 500.0);
    assert_eq!(arroz.total_general, 1250.0);

    // Present in only one menu, still part of the union.
    let ahuyama = &totals[0];
    assert_eq!(ahuyama.total_g1, 1000.0);
    assert_eq!(ahuyama.total_g2, 600.0);
    assert_eq!(ahuyama.total_general, 1600.0);
}

#[test]
fn test_final_order_line_applies_unit_policy() {
    let (store, center) = fixture();

    let menu_ids: Vec<i64> = WeeklySchedule::new(&store)
        .list(center)
        .unwrap()
        .iter()
        .map(|a| a.menu_id)
        .collect();
    let totals = WeeklyAggregator::new(&store)
        .aggregate(&menu_ids, 10, 5)
        .unwrap();

    // Both foods are pounds-classified: 1600/500 = 3.2 → 3, 1250/500 = 2.5 → 3.
    let ahuyama = totals.iter().find(|t| t.food_name == "Ahuyama").unwrap();
    assert_eq!(format_order(&ahuyama.food_name, ahuyama.total_general), "3 lb");
    let arroz = totals.iter().find(|t| t.food_name == "Arroz").unwrap();
    assert_eq!(format_order(&arroz.food_name, arroz.total_general), "3 lb");

    // Non-classified foods stay in grams.
    assert_eq!(format_order("Arroz cocido", 1600.0), "1600 g");
}

#[test]
fn test_unassign_compacts_week_positions() {
    let store = SqliteStore::open_in_memory().unwrap();
    let service = CatalogService::new(&store);
    let center = service.create_center("Jardín Norte").unwrap();
    let menus: Vec<i64> = (1..=4)
        .map(|i| service.create_menu(&format!("Minuta {}", i)).unwrap())
        .collect();

    let schedule = WeeklySchedule::new(&store);
    for &menu in &menus {
        schedule.assign(center, menu).unwrap();
    }

    // Remove position 2 of 4; the rest renumber to 1, 2, 3.
    schedule.unassign(center, menus[1]).unwrap();

    let after = schedule.list(center).unwrap();
    let positions: Vec<u32> = after.iter().map(|a| a.position).collect();
    let order: Vec<i64> = after.iter().map(|a| a.menu_id).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(order, vec![menus[0], menus[2], menus[3]]);
}

#[test]
fn test_empty_week_aggregates_to_empty_result() {
    let store = SqliteStore::open_in_memory().unwrap();
    let center = CatalogService::new(&store).create_center("Jardín Sur").unwrap();

    let menu_ids: Vec<i64> = WeeklySchedule::new(&store)
        .list(center)
        .unwrap()
        .iter()
        .map(|a| a.menu_id)
        .collect();
    let totals = WeeklyAggregator::new(&store).aggregate(&menu_ids, 10, 5).unwrap();
    assert!(totals.is_empty());
}

#[test]
fn test_deleting_a_menu_drops_it_from_week_and_totals() {
    let (store, center) = fixture();
    let schedule = WeeklySchedule::new(&store);

    let week = schedule.list(center).unwrap();
    let m1 = week[0].menu_id;
    CatalogService::new(&store).delete_menu(m1).unwrap();

    let remaining: Vec<i64> = schedule.list(center).unwrap().iter().map(|a| a.menu_id).collect();
    assert_eq!(remaining.len(), 2);
    assert!(!remaining.contains(&m1));

    let totals = WeeklyAggregator::new(&store)
        .aggregate(&remaining, 10, 5)
        .unwrap();
    // Only M2's Arroz survives.
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].sum_grams_g1, 25.0);
}
