//! Best-effort category guess from a free-text title.
//!
//! Not part of validation. Rules are tried top to bottom; the first whose
//! keywords appear in the lowercased title (and whose exclusions do not) wins.

use buscadis_catalog::Category;

/// One classification rule.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    /// Substrings that select this rule.
    pub keywords: &'static [&'static str],
    /// Substrings that veto this rule even when a keyword matched.
    pub exclusions: &'static [&'static str],
}

impl CategoryRule {
    /// Whether this rule claims an already-lowercased title.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
            && !self.exclusions.iter().any(|e| lowered.contains(e))
    }
}

/// Fallback when no rule matches.
pub const DEFAULT_CATEGORY: Category = Category::Productos;

/// Rules in priority order.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Inmuebles,
        keywords: &[
            "casa",
            "departamento",
            "minidepartamento",
            "terreno",
            "cuarto",
            "habitación",
            "habitacion",
            "local comercial",
            "oficina",
            "lote",
            "inmueble",
            "anticresis",
            "alquilo",
        ],
        exclusions: &[],
    },
    CategoryRule {
        category: Category::Vehiculos,
        keywords: &[
            "auto",
            "camioneta",
            "moto",
            "vehículo",
            "vehiculo",
            "carro",
            "camión",
            "camion",
            "minivan",
            "toyota",
            "nissan",
            "hyundai",
        ],
        exclusions: &[],
    },
    CategoryRule {
        category: Category::Empleos,
        keywords: &[
            "se necesita",
            "se requiere",
            "busco trabajo",
            "empleo",
            "trabajo",
            "personal",
            "vacante",
            "convocatoria",
            "practicante",
        ],
        exclusions: &[],
    },
    CategoryRule {
        category: Category::Servicios,
        keywords: &[
            "servicio",
            "reparación",
            "reparacion",
            "clases",
            "gasfiter",
            "electricista",
            "mudanza",
            "limpieza",
            "asesoría",
            "asesoria",
            "técnico",
            "tecnico",
        ],
        exclusions: &[],
    },
    CategoryRule {
        category: Category::Productos,
        keywords: &[
            "vendo", "venta", "remato", "oferta", "nuevo", "usado", "celular", "laptop", "ropa",
        ],
        exclusions: &[
            "vendo casa",
            "vendo terreno",
            "vendo departamento",
            "vendo lote",
            "vendo local",
        ],
    },
    CategoryRule {
        category: Category::Eventos,
        keywords: &[
            "evento",
            "concierto",
            "fiesta",
            "festival",
            "seminario",
            "taller",
            "conferencia",
            "feria",
        ],
        exclusions: &[],
    },
    CategoryRule {
        category: Category::Comunidad,
        keywords: &[
            "perdido",
            "perdida",
            "extraviado",
            "se busca",
            "donación",
            "donacion",
            "voluntario",
            "comunicado",
        ],
        exclusions: &[],
    },
    CategoryRule {
        category: Category::Negocios,
        keywords: &[
            "traspaso",
            "traspasa",
            "negocio",
            "franquicia",
            "inversión",
            "inversion",
            "socio",
        ],
        exclusions: &[],
    },
];

/// Guess a category for `title`, falling back to [`DEFAULT_CATEGORY`].
pub fn classify_title(title: &str) -> Category {
    let lowered = title.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(DEFAULT_CATEGORY)
}
