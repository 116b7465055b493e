use serde::{Deserialize, Serialize};

/// The fixed advertisement taxonomy.
///
/// Every stored publication belongs to exactly one of these eight categories,
/// and each category owns a distinct storage collection (see [`Category::collection`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Empleos,
    Inmuebles,
    Vehiculos,
    Servicios,
    Productos,
    Eventos,
    Negocios,
    Comunidad,
}

/// All categories in table order.
const ALL_CATEGORIES: &[Category] = &[
    Category::Empleos,
    Category::Inmuebles,
    Category::Vehiculos,
    Category::Servicios,
    Category::Productos,
    Category::Eventos,
    Category::Negocios,
    Category::Comunidad,
];

impl Category {
    /// Canonical name as it appears in records, URLs and table names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empleos => "empleos",
            Self::Inmuebles => "inmuebles",
            Self::Vehiculos => "vehiculos",
            Self::Servicios => "servicios",
            Self::Productos => "productos",
            Self::Eventos => "eventos",
            Self::Negocios => "negocios",
            Self::Comunidad => "comunidad",
        }
    }

    /// Storage collection (table) holding publications of this category.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Empleos => "publications_empleos",
            Self::Inmuebles => "publications_inmuebles",
            Self::Vehiculos => "publications_vehiculos",
            Self::Servicios => "publications_servicios",
            Self::Productos => "publications_productos",
            Self::Eventos => "publications_eventos",
            Self::Negocios => "publications_negocios",
            Self::Comunidad => "publications_comunidad",
        }
    }

    /// Human-readable label for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Empleos => "Empleos",
            Self::Inmuebles => "Inmuebles",
            Self::Vehiculos => "Vehículos",
            Self::Servicios => "Servicios",
            Self::Productos => "Productos",
            Self::Eventos => "Eventos",
            Self::Negocios => "Negocios",
            Self::Comunidad => "Comunidad",
        }
    }

    /// All 8 categories, in table order.
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }

    /// Comma-separated list of every valid category name.
    pub fn valid_names() -> String {
        ALL_CATEGORIES
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string is not one of the eight category names.
#[derive(Debug, Clone)]
pub struct CategoryParseError(pub String);

impl std::fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category: '{}' (valid: {})",
            self.0,
            Category::valid_names()
        )
    }
}

impl std::error::Error for CategoryParseError {}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    /// Parse a category from its exact canonical name.
    ///
    /// Matching is case-sensitive: upstream records must use the lowercase
    /// names, and anything else is rejected rather than guessed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_8_variants() {
        assert_eq!(Category::all().len(), 8);
    }

    #[test]
    fn collections_follow_naming_pattern() {
        for &category in Category::all() {
            assert_eq!(
                category.collection(),
                format!("publications_{}", category.name())
            );
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert_eq!("vehiculos".parse::<Category>().unwrap(), Category::Vehiculos);
        assert!("Vehiculos".parse::<Category>().is_err());
        assert!("mascotas".parse::<Category>().is_err());
    }
}
