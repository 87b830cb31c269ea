//! Catalog maintenance: foods, centers and menus. Food and center names
//! are unique under the canonical key, enforced here against a listing
//! snapshot rather than by raw string equality in the store.

use crate::core::matcher::CatalogIndex;
use crate::domain::model::{CenterId, FoodId, IngredientId, MenuId};
use crate::domain::ports::CatalogStore;
use crate::utils::error::{MinutasError, Result};
use crate::utils::validation::{parse_positive_quantity, validate_non_empty_name};

/// Starter food catalog shipped with the tool.
pub const INITIAL_FOODS: [&str; 74] = [
    "Aceite, de soya",
    "Ahuyama",
    "Apio",
    "Arroz",
    "Arveja verde",
    "Avena",
    "Azúcar, blanco",
    "Banano común, maduro",
    "Banano bocadillo",
    "Bienestarina",
    "Calabaza",
    "Canela",
    "Carne de Cerdo, magra",
    "Carne de res",
    "Carne de res molida",
    "Cebolla cabezona",
    "Cebolla junca",
    "Chocolate",
    "Crema de leche",
    "Durazno maduro, pulpa",
    "Esencia de vainilla",
    "Espinaca",
    "Fresa",
    "Frijol rojo",
    "Galleta (craker)",
    "Galleta Casera",
    "Galleta de leche",
    "Galleta de Soda",
    "Guayaba",
    "Habichuela",
    "Harina de maíz blanco",
    "Harina de trigo",
    "Huevo de gallina",
    "Kumis, entero con dulce",
    "Leche condensada azucarada",
    "Leche en polvo entera de vaca",
    "Lechuga",
    "Lenteja",
    "Limón",
    "Mandarina",
    "Mango, maduro pulpa",
    "Manzana, maduro pulpa",
    "Margarina",
    "Mayonesa",
    "Mora",
    "Naranja",
    "Pan aliñado",
    "Pan blandito",
    "Pan Coco",
    "Pan tajado",
    "Panela",
    "Papa común",
    "Papaya, maduro pulpa",
    "Pasta alimenticia enriq.",
    "Pasta spaguetti",
    "Pechuga de pollo",
    "Pepino Cohombro",
    "Pepino común",
    "Pera, maduro pulpa",
    "Perejil",
    "Pimentón",
    "Piña",
    "Plátano hartón maduro",
    "Plátano hartón verde",
    "Polvo de hornear",
    "Queso doble crema",
    "Remolacha",
    "Repollo, hojas frescas",
    "Sal",
    "Tomate de árbol",
    "Tomate, pulpa",
    "Tostada",
    "Yogurt, entero con dulce",
    "Zanahoria",
];

pub struct CatalogService<'a, S: CatalogStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore> CatalogService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn create_food(&self, name: &str) -> Result<FoodId> {
        let clean = validate_non_empty_name("alimento", name)?;
        let index = CatalogIndex::from_entries(
            self.store
                .list_foods()?
                .into_iter()
                .map(|f| (f.name, f.id)),
        );
        if index.resolve(&clean).is_some() {
            return Err(MinutasError::validation(
                "alimento",
                format!("'{}' already exists", clean),
            ));
        }
        self.store.create_food(&clean)
    }

    pub fn delete_food(&self, id: FoodId) -> Result<()> {
        self.store.delete_food(id)
    }

    pub fn create_center(&self, name: &str) -> Result<CenterId> {
        let clean = validate_non_empty_name("jardin", name)?;
        let index = CatalogIndex::from_entries(
            self.store
                .list_centers()?
                .into_iter()
                .map(|c| (c.name, c.id)),
        );
        if index.resolve(&clean).is_some() {
            return Err(MinutasError::validation(
                "jardin",
                format!("'{}' already exists", clean),
            ));
        }
        self.store.create_center(&clean)
    }

    pub fn rename_center(&self, id: CenterId, new_name: &str) -> Result<()> {
        let clean = validate_non_empty_name("jardin", new_name)?;
        // Uniqueness check excludes the center being renamed.
        let index = CatalogIndex::from_entries(
            self.store
                .list_centers()?
                .into_iter()
                .filter(|c| c.id != id)
                .map(|c| (c.name, c.id)),
        );
        if index.resolve(&clean).is_some() {
            return Err(MinutasError::validation(
                "jardin",
                format!("another center is already named '{}'", clean),
            ));
        }
        self.store.rename_center(id, &clean)
    }

    pub fn delete_center(&self, id: CenterId) -> Result<()> {
        self.store.delete_center(id)
    }

    /// Menu names only need to be non-empty; same-named menus may coexist.
    pub fn create_menu(&self, name: &str) -> Result<MenuId> {
        let clean = validate_non_empty_name("minuta", name)?;
        self.store.create_menu(&clean)
    }

    pub fn rename_menu(&self, id: MenuId, new_name: &str) -> Result<()> {
        let clean = validate_non_empty_name("minuta", new_name)?;
        self.store.rename_menu(id, &clean)
    }

    pub fn delete_menu(&self, id: MenuId) -> Result<()> {
        self.store.delete_menu(id)
    }

    /// Direct ingredient edit from user input. Both quantities must parse
    /// (comma or dot) and be strictly positive; nothing is written
    /// otherwise.
    pub fn set_menu_ingredient(
        &self,
        menu_id: MenuId,
        food_id: FoodId,
        raw_grams_1: &str,
        raw_grams_2: &str,
    ) -> Result<IngredientId> {
        let grams_1 = parse_positive_quantity("gramos_grupo_1", raw_grams_1)?;
        let grams_2 = parse_positive_quantity("gramos_grupo_2", raw_grams_2)?;
        self.store
            .upsert_menu_ingredient(menu_id, food_id, grams_1, grams_2)
    }

    /// Inserts every starter food whose canonical key is not already in the
    /// catalog. Returns the number inserted.
    pub fn seed_if_empty(&self) -> Result<usize> {
        let index = CatalogIndex::from_entries(
            self.store
                .list_foods()?
                .into_iter()
                .map(|f| (f.name, f.id)),
        );

        let mut inserted = 0;
        for name in INITIAL_FOODS {
            let clean = validate_non_empty_name("alimento", name)?;
            if index.resolve(&clean).is_some() {
                continue;
            }
            // Guard against duplicates within the seed list itself.
            if self.create_food(&clean).is_ok() {
                inserted += 1;
            }
        }
        tracing::info!(inserted, "seed finished");
        Ok(inserted)
    }
}
