//! Spreadsheet import reconciliation: matches rows against the food
//! catalog, creates menus as they first appear in the batch, upserts
//! ingredient quantities and accumulates a summary.
//!
//! Fatal row errors abort the run; rows already committed stay committed
//! (there is no batch-wide rollback). Soft conditions (unknown food, blank
//! food, missing or non-positive quantities) only move counters.

use crate::core::matcher::{CatalogIndex, CatalogOverlay};
use crate::core::normalize::{normalize_display, normalize_key};
use crate::domain::model::ImportSummary;
use crate::domain::ports::{CatalogStore, RowSource};
use crate::utils::error::{MinutasError, Result};
use crate::utils::validation::parse_quantity;

/// Expected spreadsheet column labels, in template order. Header matching
/// is canonical-key based, so case/accent variants of these are accepted.
pub const IMPORT_HEADERS: [&str; 4] = ["minuta", "alimento", "gramos_grupo_1", "gramos_grupo_2"];

pub struct ImportReconciler<'a, S: CatalogStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore> ImportReconciler<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Runs one full reconciliation over `source`. The food catalog is
    /// snapshotted once up front and never re-queried mid-run; the menu
    /// index starts empty, so every batch creates its own menus.
    pub fn reconcile<R: RowSource>(&self, source: &mut R) -> Result<ImportSummary> {
        let headers = source.headers()?;
        validate_headers(&headers)?;

        let foods = CatalogIndex::from_entries(
            self.store
                .list_foods()?
                .into_iter()
                .map(|f| (f.name, f.id)),
        );
        tracing::debug!("catalog snapshot: {} foods", foods.len());

        let mut menus = CatalogOverlay::empty();
        let mut summary = ImportSummary::default();
        // Header occupies row 1 of the sheet.
        let mut row_number = 1usize;

        while let Some(row) = source.next_row()? {
            row_number += 1;
            if row.is_blank() {
                continue;
            }

            let menu_name = match row.menu.as_deref().map(normalize_display) {
                Some(name) if !name.is_empty() => name,
                _ => {
                    return Err(MinutasError::row(row_number, "'minuta' is required"));
                }
            };
            summary.rows_processed += 1;

            let food_name = match row.food.as_deref().map(normalize_display) {
                Some(name) if !name.is_empty() => name,
                _ => {
                    summary.empty_food_rows += 1;
                    continue;
                }
            };

            let (raw_g1, raw_g2) = match (row.grams_group_1.as_deref(), row.grams_group_2.as_deref())
            {
                (Some(g1), Some(g2)) => (g1, g2),
                // Quantity cells left blank: a fill-in template row, skipped.
                _ => continue,
            };
            let grams_1 = parse_quantity("gramos_grupo_1", raw_g1)
                .map_err(|_| quantity_row_error(row_number, &food_name))?;
            let grams_2 = parse_quantity("gramos_grupo_2", raw_g2)
                .map_err(|_| quantity_row_error(row_number, &food_name))?;
            if grams_1 <= 0.0 || grams_2 <= 0.0 {
                continue;
            }

            let food_id = match foods.resolve(&food_name) {
                Some(id) => id,
                None => {
                    let already_listed = summary
                        .unknown_foods
                        .iter()
                        .any(|known| normalize_key(known) == normalize_key(&food_name));
                    if !already_listed {
                        summary.unknown_foods.push(food_name.clone());
                    }
                    summary.unknown_food_rows += 1;
                    continue;
                }
            };

            let menu_id = match menus.resolve(&menu_name) {
                Some(id) => {
                    summary.menus_updated += 1;
                    id
                }
                None => {
                    let id = self.store.create_menu(&menu_name)?;
                    menus.insert(&menu_name, id);
                    summary.menus_created += 1;
                    tracing::debug!(menu = %menu_name, id, "created menu from import");
                    id
                }
            };

            self.store
                .upsert_menu_ingredient(menu_id, food_id, grams_1, grams_2)?;
            summary.items_upserted += 1;
            summary.rows_imported += 1;
            summary.foods_detected += 1;
        }

        tracing::info!(
            rows = summary.rows_processed,
            imported = summary.rows_imported,
            menus_created = summary.menus_created,
            unknown = summary.unknown_food_rows,
            "import finished"
        );
        Ok(summary)
    }
}

fn quantity_row_error(row: usize, food_name: &str) -> MinutasError {
    MinutasError::row(row, format!("invalid gram quantities for '{}'", food_name))
}

/// The header row must contain all expected labels (canonical-key
/// comparison); the error names exactly the absent ones.
fn validate_headers(headers: &[String]) -> Result<()> {
    let present: Vec<String> = headers.iter().map(|h| normalize_key(h)).collect();
    let missing: Vec<String> = IMPORT_HEADERS
        .iter()
        .filter(|expected| !present.contains(&normalize_key(expected)))
        .map(|expected| expected.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MinutasError::MissingColumnsError { missing })
    }
}
