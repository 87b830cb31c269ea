//! Weekly-order aggregation: unions ingredient quantities across a set of
//! menus, scales them by the two age-group headcounts and sorts the result
//! by canonical food name.
//!
//! The arithmetic is a pure function over already-fetched ingredient rows;
//! storage access stays behind the `CatalogStore` port so the algorithm is
//! testable with fixtures.

use std::collections::HashSet;

use crate::core::normalize::normalize_key;
use crate::domain::model::{FoodTotal, IngredientRow, MenuId};
use crate::domain::ports::CatalogStore;
use crate::utils::error::Result;

/// Sums `rows` per food and applies the headcounts. Every row contributes
/// additively; a food missing from one menu simply contributes zero for
/// that menu (union, not intersection).
pub fn aggregate_rows(rows: &[IngredientRow], headcount_1: u32, headcount_2: u32) -> Vec<FoodTotal> {
    let mut totals: Vec<FoodTotal> = Vec::new();

    for row in rows {
        match totals.iter_mut().find(|t| t.food_id == row.food_id) {
            Some(total) => {
                total.sum_grams_g1 += row.grams_group_1;
                total.sum_grams_g2 += row.grams_group_2;
            }
            None => totals.push(FoodTotal {
                food_id: row.food_id,
                food_name: row.food_name.clone(),
                sum_grams_g1: row.grams_group_1,
                sum_grams_g2: row.grams_group_2,
                total_g1: 0.0,
                total_g2: 0.0,
                total_general: 0.0,
            }),
        }
    }

    for total in &mut totals {
        total.total_g1 = total.sum_grams_g1 * f64::from(headcount_1);
        total.total_g2 = total.sum_grams_g2 * f64::from(headcount_2);
        total.total_general = total.total_g1 + total.total_g2;
    }

    totals.sort_by(|a, b| {
        normalize_key(&a.food_name)
            .cmp(&normalize_key(&b.food_name))
            .then_with(|| a.food_name.cmp(&b.food_name))
    });
    totals
}

pub struct WeeklyAggregator<'a, S: CatalogStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore> WeeklyAggregator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Duplicate menu ids are ignored; an empty selection yields an empty
    /// list. Headcount validation happens at the input boundary
    /// (`utils::validation::parse_headcount`), so the values here are
    /// already non-negative by type.
    pub fn aggregate(
        &self,
        menu_ids: &[MenuId],
        headcount_1: u32,
        headcount_2: u32,
    ) -> Result<Vec<FoodTotal>> {
        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        for &menu_id in menu_ids {
            if !seen.insert(menu_id) {
                continue;
            }
            rows.extend(self.store.list_menu_ingredients(menu_id)?);
        }

        tracing::debug!(
            menus = seen.len(),
            ingredient_rows = rows.len(),
            "aggregating weekly order"
        );
        Ok(aggregate_rows(&rows, headcount_1, headcount_2))
    }
}
