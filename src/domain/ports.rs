use crate::domain::model::{
    AssignmentRow, CenterId, CenterRecord, FoodId, FoodRecord, IngredientId, IngredientRow,
    MenuId, MenuRecord, RawRow,
};
use crate::utils::error::Result;

/// Storage seam for the catalog, menus, ingredient links and weekly
/// assignments. Implementations are expected to enforce the cascade rules:
/// deleting a food removes its ingredient rows, deleting a menu removes its
/// ingredient rows and assignments, deleting a center removes its
/// assignments.
pub trait CatalogStore {
    fn list_foods(&self) -> Result<Vec<FoodRecord>>;
    fn create_food(&self, name: &str) -> Result<FoodId>;
    fn delete_food(&self, id: FoodId) -> Result<()>;

    fn list_centers(&self) -> Result<Vec<CenterRecord>>;
    fn create_center(&self, name: &str) -> Result<CenterId>;
    fn rename_center(&self, id: CenterId, name: &str) -> Result<()>;
    fn delete_center(&self, id: CenterId) -> Result<()>;

    fn list_menus(&self) -> Result<Vec<MenuRecord>>;
    fn create_menu(&self, name: &str) -> Result<MenuId>;
    fn get_menu(&self, id: MenuId) -> Result<Option<MenuRecord>>;
    fn rename_menu(&self, id: MenuId, name: &str) -> Result<()>;
    fn delete_menu(&self, id: MenuId) -> Result<()>;

    fn list_menu_ingredients(&self, menu_id: MenuId) -> Result<Vec<IngredientRow>>;
    fn upsert_menu_ingredient(
        &self,
        menu_id: MenuId,
        food_id: FoodId,
        grams_group_1: f64,
        grams_group_2: f64,
    ) -> Result<IngredientId>;
    fn remove_menu_ingredient(&self, id: IngredientId) -> Result<()>;

    /// Ordered by position ascending.
    fn list_weekly_assignments(&self, center_id: CenterId) -> Result<Vec<AssignmentRow>>;
    fn add_weekly_assignment(
        &self,
        center_id: CenterId,
        menu_id: MenuId,
        position: u32,
    ) -> Result<()>;
    fn remove_weekly_assignment(&self, center_id: CenterId, menu_id: MenuId) -> Result<()>;
    fn set_weekly_position(&self, center_id: CenterId, menu_id: MenuId, position: u32)
        -> Result<()>;
}

/// Lazy sequence of spreadsheet rows plus the header row.
pub trait RowSource {
    fn headers(&mut self) -> Result<Vec<String>>;
    fn next_row(&mut self) -> Result<Option<RawRow>>;
}
