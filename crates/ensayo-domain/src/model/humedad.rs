//! Moisture content test record (ASTM D2216)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reference::{MetodoFilaBase, METODO_A_FILAS, METODO_B_FILAS};
use crate::service::fecha::format_short_date;

/// Tri-state Si/No condition as rendered on the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condicion {
    #[default]
    #[serde(rename = "-")]
    NoIndicado,
    #[serde(rename = "SI")]
    Si,
    #[serde(rename = "NO")]
    No,
}

impl std::fmt::Display for Condicion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condicion::NoIndicado => write!(f, "-"),
            Condicion::Si => write!(f, "SI"),
            Condicion::No => write!(f, "NO"),
        }
    }
}

/// One row of the Method A / Method B tables (particle size, minimum
/// mass, balance readability)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetodoFila {
    pub tamano: String,
    pub masa: String,
    pub legibilidad: String,
}

impl From<MetodoFilaBase> for MetodoFila {
    fn from(base: MetodoFilaBase) -> Self {
        Self {
            tamano: base.tamano.to_string(),
            masa: base.masa.to_string(),
            legibilidad: base.legibilidad.to_string(),
        }
    }
}

/// Moisture content data-entry record
///
/// Field names follow the report template (Spanish) so the serialized
/// record stays wire-compatible with the persistence backend. All masses
/// are in grams. The three derived fields at the bottom are recomputed by
/// `service::humedad` and must be absent whenever any required input is
/// missing; they are never entered by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HumedadRecord {
    // Encabezado
    pub muestra: String,
    pub numero_ot: String,
    #[serde(default)]
    pub fecha_ensayo: String,
    pub realizado_por: String,

    // Condiciones del ensayo
    #[serde(default)]
    pub condicion_masa_menor: Condicion,
    #[serde(default)]
    pub condicion_capas: Condicion,
    #[serde(default)]
    pub condicion_temperatura: Condicion,
    #[serde(default)]
    pub condicion_excluido: Condicion,
    #[serde(default)]
    pub descripcion_material_excluido: Option<String>,

    // Descripción de la muestra
    #[serde(default)]
    pub tipo_muestra: Option<String>,
    #[serde(default)]
    pub condicion_muestra: Option<String>,
    #[serde(default)]
    pub tamano_maximo_particula: Option<String>,
    #[serde(default)]
    pub metodo_a: bool,
    #[serde(default)]
    pub metodo_b: bool,
    #[serde(default)]
    pub metodo_a_filas: [MetodoFila; 3],
    #[serde(default)]
    pub metodo_b_filas: [MetodoFila; 3],

    // Datos del ensayo
    #[serde(default)]
    pub numero_ensayo: Option<u32>,
    #[serde(default)]
    pub recipiente_numero: Option<String>,
    #[serde(default)]
    pub masa_recipiente_muestra_humeda: Option<f64>,
    #[serde(default)]
    pub masa_recipiente_muestra_seca: Option<f64>,
    #[serde(default)]
    pub masa_recipiente_muestra_seca_constante: Option<f64>,
    #[serde(default)]
    pub masa_recipiente: Option<f64>,

    // Derivados (ver service::humedad)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masa_agua: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masa_muestra_seca: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contenido_humedad: Option<f64>,

    // Equipo utilizado
    #[serde(default)]
    pub equipo_balanza_01: Option<String>,
    #[serde(default)]
    pub equipo_balanza_001: Option<String>,
    #[serde(default)]
    pub equipo_horno: Option<String>,

    // Pie de formato
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub revisado_por: Option<String>,
    #[serde(default)]
    pub revisado_fecha: Option<String>,
    #[serde(default)]
    pub aprobado_por: Option<String>,
    #[serde(default)]
    pub aprobado_fecha: Option<String>,
}

impl HumedadRecord {
    /// Fresh record the way the form opens: today's date prefilled and
    /// the Method A / Method B reference rows populated.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            fecha_ensayo: format_short_date(today),
            numero_ensayo: Some(1),
            metodo_a_filas: METODO_A_FILAS.map(MetodoFila::from),
            metodo_b_filas: METODO_B_FILAS.map(MetodoFila::from),
            ..Default::default()
        }
    }
}
