//! SQLite `CatalogStore`. Owns the schema: CHECK(> 0) on both gram
//! columns, UNIQUE (menu, food), UNIQUE (center, menu) and
//! (center, position), and the ON DELETE CASCADE rules the domain expects.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::domain::model::{
    AssignmentRow, CenterId, CenterRecord, FoodId, FoodRecord, IngredientId, IngredientRow,
    MenuId, MenuRecord,
};
use crate::domain::ports::CatalogStore;
use crate::utils::error::Result;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS alimentos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS jardines (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS minutas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL,
        fecha_creacion TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS minuta_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        minuta_id INTEGER NOT NULL,
        alimento_id INTEGER NOT NULL,
        gramos_grupo_1 REAL NOT NULL CHECK (gramos_grupo_1 > 0),
        gramos_grupo_2 REAL NOT NULL CHECK (gramos_grupo_2 > 0),
        FOREIGN KEY (minuta_id) REFERENCES minutas(id) ON DELETE CASCADE,
        FOREIGN KEY (alimento_id) REFERENCES alimentos(id) ON DELETE CASCADE,
        UNIQUE (minuta_id, alimento_id)
    );

    CREATE TABLE IF NOT EXISTS jardin_minutas_semana (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        jardin_id INTEGER NOT NULL,
        minuta_id INTEGER NOT NULL,
        orden INTEGER NOT NULL,
        FOREIGN KEY (jardin_id) REFERENCES jardines(id) ON DELETE CASCADE,
        FOREIGN KEY (minuta_id) REFERENCES minutas(id) ON DELETE CASCADE,
        UNIQUE (jardin_id, minuta_id),
        UNIQUE (jardin_id, orden)
    );
";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

impl CatalogStore for SqliteStore {
    fn list_foods(&self) -> Result<Vec<FoodRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, nombre FROM alimentos ORDER BY nombre")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(FoodRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn create_food(&self, name: &str) -> Result<FoodId> {
        self.conn
            .execute("INSERT INTO alimentos (nombre) VALUES (?1)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn delete_food(&self, id: FoodId) -> Result<()> {
        self.conn
            .execute("DELETE FROM alimentos WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn list_centers(&self) -> Result<Vec<CenterRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, nombre FROM jardines ORDER BY nombre")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CenterRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn create_center(&self, name: &str) -> Result<CenterId> {
        self.conn
            .execute("INSERT INTO jardines (nombre) VALUES (?1)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn rename_center(&self, id: CenterId, name: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE jardines SET nombre = ?1 WHERE id = ?2",
            params![name, id],
        )?;
        Ok(())
    }

    fn delete_center(&self, id: CenterId) -> Result<()> {
        self.conn
            .execute("DELETE FROM jardines WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn list_menus(&self) -> Result<Vec<MenuRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, nombre, fecha_creacion FROM minutas
             ORDER BY datetime(fecha_creacion) DESC, id DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MenuRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn create_menu(&self, name: &str) -> Result<MenuId> {
        self.conn
            .execute("INSERT INTO minutas (nombre) VALUES (?1)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_menu(&self, id: MenuId) -> Result<Option<MenuRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, nombre, fecha_creacion FROM minutas WHERE id = ?1")?;
        let mut rows = stmt.query_map(params![id], |row| {
            Ok(MenuRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;
        match rows.next() {
            Some(record) => Ok(Some(record?)),
            None => Ok(None),
        }
    }

    fn rename_menu(&self, id: MenuId, name: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE minutas SET nombre = ?1 WHERE id = ?2",
            params![name, id],
        )?;
        Ok(())
    }

    fn delete_menu(&self, id: MenuId) -> Result<()> {
        self.conn
            .execute("DELETE FROM minutas WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn list_menu_ingredients(&self, menu_id: MenuId) -> Result<Vec<IngredientRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT mi.id, mi.alimento_id, a.nombre, mi.gramos_grupo_1, mi.gramos_grupo_2
             FROM minuta_items mi
             JOIN alimentos a ON a.id = mi.alimento_id
             WHERE mi.minuta_id = ?1
             ORDER BY a.nombre",
        )?;
        let rows = stmt
            .query_map(params![menu_id], |row| {
                Ok(IngredientRow {
                    id: row.get(0)?,
                    food_id: row.get(1)?,
                    food_name: row.get(2)?,
                    grams_group_1: row.get(3)?,
                    grams_group_2: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn upsert_menu_ingredient(
        &self,
        menu_id: MenuId,
        food_id: FoodId,
        grams_group_1: f64,
        grams_group_2: f64,
    ) -> Result<IngredientId> {
        self.conn.execute(
            "INSERT INTO minuta_items (minuta_id, alimento_id, gramos_grupo_1, gramos_grupo_2)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (minuta_id, alimento_id)
             DO UPDATE SET gramos_grupo_1 = excluded.gramos_grupo_1,
                           gramos_grupo_2 = excluded.gramos_grupo_2",
            params![menu_id, food_id, grams_group_1, grams_group_2],
        )?;
        let id = self.conn.query_row(
            "SELECT id FROM minuta_items WHERE minuta_id = ?1 AND alimento_id = ?2",
            params![menu_id, food_id],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    fn remove_menu_ingredient(&self, id: IngredientId) -> Result<()> {
        self.conn
            .execute("DELETE FROM minuta_items WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn list_weekly_assignments(&self, center_id: CenterId) -> Result<Vec<AssignmentRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.minuta_id, m.nombre, s.orden, m.fecha_creacion
             FROM jardin_minutas_semana s
             JOIN minutas m ON m.id = s.minuta_id
             WHERE s.jardin_id = ?1
             ORDER BY s.orden",
        )?;
        let rows = stmt
            .query_map(params![center_id], |row| {
                Ok(AssignmentRow {
                    menu_id: row.get(0)?,
                    menu_name: row.get(1)?,
                    position: row.get(2)?,
                    menu_created_at: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn add_weekly_assignment(
        &self,
        center_id: CenterId,
        menu_id: MenuId,
        position: u32,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT INTO jardin_minutas_semana (jardin_id, minuta_id, orden) VALUES (?1, ?2, ?3)",
            params![center_id, menu_id, position],
        )?;
        Ok(())
    }

    fn remove_weekly_assignment(&self, center_id: CenterId, menu_id: MenuId) -> Result<()> {
        self.conn.execute(
            "DELETE FROM jardin_minutas_semana WHERE jardin_id = ?1 AND minuta_id = ?2",
            params![center_id, menu_id],
        )?;
        Ok(())
    }

    fn set_weekly_position(
        &self,
        center_id: CenterId,
        menu_id: MenuId,
        position: u32,
    ) -> Result<()> {
        self.conn.execute(
            "UPDATE jardin_minutas_semana SET orden = ?1 WHERE jardin_id = ?2 AND minuta_id = ?3",
            params![position, center_id, menu_id],
        )?;
        Ok(())
    }
}
