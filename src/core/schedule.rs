//! Weekly schedule: the ordered set of menus assigned to a center.
//! Positions stay a dense 1..N sequence; removals compact the remainder.

use crate::domain::model::{AssignmentRow, CenterId, MenuId};
use crate::domain::ports::CatalogStore;
use crate::utils::error::{MinutasError, Result};

pub struct WeeklySchedule<'a, S: CatalogStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore> WeeklySchedule<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn list(&self, center_id: CenterId) -> Result<Vec<AssignmentRow>> {
        self.store.list_weekly_assignments(center_id)
    }

    /// Appends the menu at the next position. A menu can appear at most
    /// once per center.
    pub fn assign(&self, center_id: CenterId, menu_id: MenuId) -> Result<u32> {
        if self.store.get_menu(menu_id)?.is_none() {
            return Err(MinutasError::NotFoundError {
                what: format!("menu {}", menu_id),
            });
        }

        let existing = self.store.list_weekly_assignments(center_id)?;
        if existing.iter().any(|a| a.menu_id == menu_id) {
            return Err(MinutasError::validation(
                "minuta",
                "menu is already assigned to this center's week",
            ));
        }

        let position = existing.len() as u32 + 1;
        self.store
            .add_weekly_assignment(center_id, menu_id, position)?;
        Ok(position)
    }

    /// Removes the assignment and renumbers the remaining ones to 1..N.
    /// Renumbering walks positions ascending, so each move lands on a slot
    /// just freed and never collides with the (center, position) constraint.
    pub fn unassign(&self, center_id: CenterId, menu_id: MenuId) -> Result<()> {
        self.store.remove_weekly_assignment(center_id, menu_id)?;

        let remaining = self.store.list_weekly_assignments(center_id)?;
        for (index, assignment) in remaining.iter().enumerate() {
            let wanted = index as u32 + 1;
            if assignment.position != wanted {
                self.store
                    .set_weekly_position(center_id, assignment.menu_id, wanted)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::domain::ports::CatalogStore;

    fn store_with_week() -> (MemoryStore, CenterId, Vec<MenuId>) {
        let store = MemoryStore::new();
        let center = store.create_center("Jardín Norte").unwrap();
        let menus: Vec<MenuId> = (1..=4)
            .map(|i| store.create_menu(&format!("Minuta {}", i)).unwrap())
            .collect();
        let schedule = WeeklySchedule::new(&store);
        for &menu in &menus {
            schedule.assign(center, menu).unwrap();
        }
        (store, center, menus)
    }

    #[test]
    fn test_assign_appends_dense_positions() {
        let (store, center, _) = store_with_week();
        let positions: Vec<u32> = store
            .list_weekly_assignments(center)
            .unwrap()
            .iter()
            .map(|a| a.position)
            .collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_assign_rejects_duplicates() {
        let (store, center, menus) = store_with_week();
        let schedule = WeeklySchedule::new(&store);
        assert!(schedule.assign(center, menus[0]).is_err());
    }

    #[test]
    fn test_assign_unknown_menu_fails() {
        let (store, center, _) = store_with_week();
        let schedule = WeeklySchedule::new(&store);
        assert!(schedule.assign(center, 9999).is_err());
    }

    #[test]
    fn test_unassign_compacts_positions() {
        let (store, center, menus) = store_with_week();
        let schedule = WeeklySchedule::new(&store);

        schedule.unassign(center, menus[1]).unwrap();

        let after = store.list_weekly_assignments(center).unwrap();
        let positions: Vec<u32> = after.iter().map(|a| a.position).collect();
        let order: Vec<MenuId> = after.iter().map(|a| a.menu_id).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(order, vec![menus[0], menus[2], menus[3]]);
    }

    #[test]
    fn test_unassign_first_shifts_everything_down() {
        let (store, center, menus) = store_with_week();
        let schedule = WeeklySchedule::new(&store);

        schedule.unassign(center, menus[0]).unwrap();

        let positions: Vec<u32> = store
            .list_weekly_assignments(center)
            .unwrap()
            .iter()
            .map(|a| a.position)
            .collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
