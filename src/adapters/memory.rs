//! In-memory `CatalogStore`. Backs the unit tests and fixtures; applies
//! the same cascade rules as the SQLite schema.

use std::cell::RefCell;

use chrono::Utc;

use crate::domain::model::{
    AssignmentRow, CenterId, CenterRecord, FoodId, FoodRecord, IngredientId, IngredientRow,
    MenuId, MenuRecord,
};
use crate::domain::ports::CatalogStore;
use crate::utils::error::{MinutasError, Result};

#[derive(Debug, Clone)]
struct ItemRow {
    id: IngredientId,
    menu_id: MenuId,
    food_id: FoodId,
    grams_group_1: f64,
    grams_group_2: f64,
}

#[derive(Debug, Clone)]
struct WeekRow {
    center_id: CenterId,
    menu_id: MenuId,
    position: u32,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    foods: Vec<FoodRecord>,
    centers: Vec<CenterRecord>,
    menus: Vec<MenuRecord>,
    items: Vec<ItemRow>,
    week: Vec<WeekRow>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RefCell<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for MemoryStore {
    fn list_foods(&self) -> Result<Vec<FoodRecord>> {
        Ok(self.inner.borrow().foods.clone())
    }

    fn create_food(&self, name: &str) -> Result<FoodId> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        inner.foods.push(FoodRecord {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    fn delete_food(&self, id: FoodId) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.foods.retain(|f| f.id != id);
        inner.items.retain(|i| i.food_id != id);
        Ok(())
    }

    fn list_centers(&self) -> Result<Vec<CenterRecord>> {
        Ok(self.inner.borrow().centers.clone())
    }

    fn create_center(&self, name: &str) -> Result<CenterId> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        inner.centers.push(CenterRecord {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    fn rename_center(&self, id: CenterId, name: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        match inner.centers.iter_mut().find(|c| c.id == id) {
            Some(center) => {
                center.name = name.to_string();
                Ok(())
            }
            None => Err(MinutasError::NotFoundError {
                what: format!("center {}", id),
            }),
        }
    }

    fn delete_center(&self, id: CenterId) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.centers.retain(|c| c.id != id);
        inner.week.retain(|w| w.center_id != id);
        Ok(())
    }

    fn list_menus(&self) -> Result<Vec<MenuRecord>> {
        Ok(self.inner.borrow().menus.clone())
    }

    fn create_menu(&self, name: &str) -> Result<MenuId> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        inner.menus.push(MenuRecord {
            id,
            name: name.to_string(),
            created_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        Ok(id)
    }

    fn get_menu(&self, id: MenuId) -> Result<Option<MenuRecord>> {
        Ok(self.inner.borrow().menus.iter().find(|m| m.id == id).cloned())
    }

    fn rename_menu(&self, id: MenuId, name: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        match inner.menus.iter_mut().find(|m| m.id == id) {
            Some(menu) => {
                menu.name = name.to_string();
                Ok(())
            }
            None => Err(MinutasError::NotFoundError {
                what: format!("menu {}", id),
            }),
        }
    }

    fn delete_menu(&self, id: MenuId) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.menus.retain(|m| m.id != id);
        inner.items.retain(|i| i.menu_id != id);
        inner.week.retain(|w| w.menu_id != id);
        Ok(())
    }

    fn list_menu_ingredients(&self, menu_id: MenuId) -> Result<Vec<IngredientRow>> {
        let inner = self.inner.borrow();
        let mut rows: Vec<IngredientRow> = inner
            .items
            .iter()
            .filter(|i| i.menu_id == menu_id)
            .map(|i| {
                let food_name = inner
                    .foods
                    .iter()
                    .find(|f| f.id == i.food_id)
                    .map(|f| f.name.clone())
                    .unwrap_or_default();
                IngredientRow {
                    id: i.id,
                    food_id: i.food_id,
                    food_name,
                    grams_group_1: i.grams_group_1,
                    grams_group_2: i.grams_group_2,
                }
            })
            .collect();
        rows.sort_by(|a, b| a.food_name.cmp(&b.food_name));
        Ok(rows)
    }

    fn upsert_menu_ingredient(
        &self,
        menu_id: MenuId,
        food_id: FoodId,
        grams_group_1: f64,
        grams_group_2: f64,
    ) -> Result<IngredientId> {
        let mut inner = self.inner.borrow_mut();
        if let Some(existing) = inner
            .items
            .iter_mut()
            .find(|i| i.menu_id == menu_id && i.food_id == food_id)
        {
            existing.grams_group_1 = grams_group_1;
            existing.grams_group_2 = grams_group_2;
            return Ok(existing.id);
        }

        let id = inner.next_id();
        inner.items.push(ItemRow {
            id,
            menu_id,
            food_id,
            grams_group_1,
            grams_group_2,
        });
        Ok(id)
    }

    fn remove_menu_ingredient(&self, id: IngredientId) -> Result<()> {
        self.inner.borrow_mut().items.retain(|i| i.id != id);
        Ok(())
    }

    fn list_weekly_assignments(&self, center_id: CenterId) -> Result<Vec<AssignmentRow>> {
        let inner = self.inner.borrow();
        let mut rows: Vec<AssignmentRow> = inner
            .week
            .iter()
            .filter(|w| w.center_id == center_id)
            .map(|w| {
                let menu = inner.menus.iter().find(|m| m.id == w.menu_id);
                AssignmentRow {
                    menu_id: w.menu_id,
                    menu_name: menu.map(|m| m.name.clone()).unwrap_or_default(),
                    position: w.position,
                    menu_created_at: menu.map(|m| m.created_at.clone()).unwrap_or_default(),
                }
            })
            .collect();
        rows.sort_by_key(|a| a.position);
        Ok(rows)
    }

    fn add_weekly_assignment(
        &self,
        center_id: CenterId,
        menu_id: MenuId,
        position: u32,
    ) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        let duplicate = inner.week.iter().any(|w| {
            w.center_id == center_id && (w.menu_id == menu_id || w.position == position)
        });
        if duplicate {
            return Err(MinutasError::validation(
                "semana",
                "assignment conflicts with an existing (menu or position) entry",
            ));
        }
        inner.week.push(WeekRow {
            center_id,
            menu_id,
            position,
        });
        Ok(())
    }

    fn remove_weekly_assignment(&self, center_id: CenterId, menu_id: MenuId) -> Result<()> {
        self.inner
            .borrow_mut()
            .week
            .retain(|w| !(w.center_id == center_id && w.menu_id == menu_id));
        Ok(())
    }

    fn set_weekly_position(
        &self,
        center_id: CenterId,
        menu_id: MenuId,
        position: u32,
    ) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        match inner
            .week
            .iter_mut()
            .find(|w| w.center_id == center_id && w.menu_id == menu_id)
        {
            Some(row) => {
                row.position = position;
                Ok(())
            }
            None => Err(MinutasError::NotFoundError {
                what: format!("assignment center {} menu {}", center_id, menu_id),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_food_cascades_ingredient_rows() {
        let store = MemoryStore::new();
        let food = store.create_food("Arroz").unwrap();
        let menu = store.create_menu("M1").unwrap();
        store.upsert_menu_ingredient(menu, food, 10.0, 10.0).unwrap();

        store.delete_food(food).unwrap();
        assert!(store.list_menu_ingredients(menu).unwrap().is_empty());
    }

    #[test]
    fn test_delete_menu_cascades_items_and_assignments() {
        let store = MemoryStore::new();
        let food = store.create_food("Arroz").unwrap();
        let menu = store.create_menu("M1").unwrap();
        let center = store.create_center("Jardín").unwrap();
        store.upsert_menu_ingredient(menu, food, 10.0, 10.0).unwrap();
        store.add_weekly_assignment(center, menu, 1).unwrap();

        store.delete_menu(menu).unwrap();
        assert!(store.list_menu_ingredients(menu).unwrap().is_empty());
        assert!(store.list_weekly_assignments(center).unwrap().is_empty());
    }

    #[test]
    fn test_upsert_replaces_instead_of_duplicating() {
        let store = MemoryStore::new();
        let food = store.create_food("Arroz").unwrap();
        let menu = store.create_menu("M1").unwrap();

        let first = store.upsert_menu_ingredient(menu, food, 10.0, 10.0).unwrap();
        let second = store.upsert_menu_ingredient(menu, food, 20.0, 30.0).unwrap();
        assert_eq!(first, second);

        let items = store.list_menu_ingredients(menu).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].grams_group_2, 30.0);
    }
}
