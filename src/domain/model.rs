use serde::{Deserialize, Serialize};

pub type FoodId = i64;
pub type CenterId = i64;
pub type MenuId = i64;
pub type IngredientId = i64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: FoodId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterRecord {
    pub id: CenterId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: MenuId,
    pub name: String,
    pub created_at: String,
}

/// One (menu, food) link with its per-age-group gram quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRow {
    pub id: IngredientId,
    pub food_id: FoodId,
    pub food_name: String,
    pub grams_group_1: f64,
    pub grams_group_2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub menu_id: MenuId,
    pub menu_name: String,
    pub position: u32,
    pub menu_created_at: String,
}

/// Raw spreadsheet row as read from the import source. Cells that are
/// missing or blank after trimming come through as `None`.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub menu: Option<String>,
    pub food: Option<String>,
    pub grams_group_1: Option<String>,
    pub grams_group_2: Option<String>,
}

impl RawRow {
    pub fn is_blank(&self) -> bool {
        self.menu.is_none()
            && self.food.is_none()
            && self.grams_group_1.is_none()
            && self.grams_group_2.is_none()
    }
}

/// Outcome of one reconciliation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Non-blank rows that passed the menu-name check.
    pub rows_processed: usize,
    /// Rows whose ingredient quantities were actually written.
    pub rows_imported: usize,
    pub menus_created: usize,
    /// Rows applied to a menu already created earlier in the same batch.
    /// The menu record itself does not change on those rows; the name is
    /// historical and kept for caller compatibility.
    pub menus_updated: usize,
    pub items_upserted: usize,
    pub foods_detected: usize,
    pub unknown_food_rows: usize,
    pub empty_food_rows: usize,
    /// Unmatched food display names, deduplicated, first-seen order.
    pub unknown_foods: Vec<String>,
}

/// Aggregated weekly need for one food across the selected menus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodTotal {
    pub food_id: FoodId,
    pub food_name: String,
    pub sum_grams_g1: f64,
    pub sum_grams_g2: f64,
    pub total_g1: f64,
    pub total_g2: f64,
    pub total_general: f64,
}
