//! Final-order formatting. Produce-style foods are ordered in pounds (one
//! "pound" being 500 g here, the local market convention); everything else
//! stays in grams. The pounds classification is a static list independent
//! of the food catalog.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::normalize::normalize_key;

/// Grams per pound-equivalent purchasing unit.
pub const GRAMS_PER_POUND: f64 = 500.0;

const POUNDS_FOODS_RAW: [&str; 46] = [
    "Ahuyama",
    "Apio",
    "Arveja verde c/cáscara",
    "Banano bocadillo",
    "Banano común",
    "Calabazín",
    "Cebolla cabezona",
    "Cebolla larga",
    "Crema de leche x 125 gr",
    "Espinaca",
    "Fresa",
    "Durazno NACIONAL MADURO",
    "Guayaba JUGO",
    "Habichuela",
    "Lechuga",
    "Mandarina PORCION",
    "Mango PORCION",
    "Manzana ANA O ROYAL",
    "Mora JUGO",
    "Naranja DULCE PORCION",
    "Papa común",
    "Papaya PORCION",
    "Pepino cohombro",
    "Pepino de guiso",
    "Pera PORCION",
    "Piña ORO MIEL PORCIÓN",
    "Plátano maduro",
    "Plátano verde",
    "Queso doble crema",
    "Remolacha",
    "Repollo blanco",
    "Tomate chonto o río",
    "Zanahoria",
    "Carne de res MAGRA MOLIDA",
    "Carne de res MAGRA BLANDA",
    "Carne de cerdo MAGRA",
    "Pechuga de pollo",
    "Arroz",
    "Azúcar",
    "Chocolate de mesa",
    "Harina de trigo",
    "Harina de maíz para arepas",
    "Lenteja",
    "Sal",
    "Frijol rojo",
    "Tomate de arbol",
];

static POUNDS_FOODS: LazyLock<HashSet<String>> =
    LazyLock::new(|| POUNDS_FOODS_RAW.iter().map(|f| normalize_key(f)).collect());

pub fn is_pounds_food(food_name: &str) -> bool {
    POUNDS_FOODS.contains(&normalize_key(food_name))
}

/// Round to the nearest integer with ties going away from zero (2.5 → 3),
/// not banker's rounding.
fn round_half_up(value: f64) -> i64 {
    if value >= 0.0 {
        (value + 0.5).floor() as i64
    } else {
        (value - 0.5).ceil() as i64
    }
}

/// Renders the final order line for one food: `"<N> lb"` for
/// pounds-classified foods, otherwise the gram total with its minimal
/// decimal representation (`1600.0` and `1600` render identically).
pub fn format_order(food_name: &str, total_grams: f64) -> String {
    if is_pounds_food(food_name) {
        let pounds = total_grams / GRAMS_PER_POUND;
        return format!("{} lb", round_half_up(pounds));
    }

    if total_grams == total_grams.trunc() {
        format!("{} g", total_grams as i64)
    } else {
        format!("{} g", total_grams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_food_rounds_half_up() {
        // 1600 / 500 = 3.2 → 3
        assert_eq!(format_order("Zanahoria", 1600.0), "3 lb");
        // 1250 / 500 = 2.5 → 3, ties away from zero
        assert_eq!(format_order("Zanahoria", 1250.0), "3 lb");
        // 1100 / 500 = 2.2 → 2
        assert_eq!(format_order("Papa común", 1100.0), "2 lb");
    }

    #[test]
    fn test_classification_uses_canonical_key() {
        assert!(is_pounds_food("  zanahoria "));
        assert!(is_pounds_food("PLÁTANO VERDE"));
        assert!(is_pounds_food("platano verde"));
        assert!(!is_pounds_food("Arroz cocido"));
    }

    #[test]
    fn test_gram_food_renders_grams() {
        assert_eq!(format_order("Arroz cocido", 1600.0), "1600 g");
        assert_eq!(format_order("Huevo de gallina", 12.5), "12.5 g");
        assert_eq!(format_order("Huevo de gallina", 0.0), "0 g");
    }

    #[test]
    fn test_integral_float_renders_without_fraction() {
        // Sums arrive as floats; 1600.0 must render the same as 1600.
        assert_eq!(format_order("Avena", 16.0 * 100.0), "1600 g");
        assert_eq!(format_order("Avena", 250.0), "250 g");
    }
}
