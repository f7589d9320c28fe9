//! Per-column humidity derivation and compliance check for the CBR form
//!
//! Replicates the report template formulas: wet soil mass per column
//! (row 32 = wet soil+tare - tare) and the reference moisture content
//! per column (rows S30:S36, (wet - dry) / dry * 100 with
//! dry = dry-constant+tare - tare). Each specimen's moisture is compared
//! against the target optimum moisture within a fixed tolerance band.

use serde::Serialize;

use crate::model::cbr::{CbrRecord, Especimen, Saturacion, COLUMNAS};
use crate::service::humedad::round2;

/// Allowed deviation from the optimum moisture, in absolute percentage
/// points. Fixed by the lab procedure, not configurable.
pub const TOLERANCIA_HUMEDAD: f64 = 2.0;

/// Compliance state of one specimen's moisture against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Estado {
    #[serde(rename = "Cumple")]
    Cumple,
    #[serde(rename = "No cumple")]
    NoCumple,
    #[serde(rename = "-")]
    NoDisponible,
}

impl std::fmt::Display for Estado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Estado::Cumple => write!(f, "Cumple"),
            Estado::NoCumple => write!(f, "No cumple"),
            Estado::NoDisponible => write!(f, "-"),
        }
    }
}

/// One row of the reference-moisture summary table
#[derive(Debug, Clone, Serialize)]
pub struct FilaResumen {
    pub muestra: String,
    pub valor: Option<f64>,
    pub estado: Estado,
}

/// The two summary tables shown next to the form: one row per specimen,
/// unsaturated and saturated
#[derive(Debug, Clone, Serialize)]
pub struct ResumenHumedad {
    pub sin_saturar: Vec<FilaResumen>,
    pub saturado: Vec<FilaResumen>,
}

/// Wet soil mass per column: wet soil+tare minus tare, 2 decimals
pub fn masa_suelo_humedo_por_columna(record: &CbrRecord) -> [Option<f64>; COLUMNAS] {
    std::array::from_fn(|idx| {
        match (
            record.masa_suelo_humedo_tara_g_por_columna[idx],
            record.masa_tara_g_por_columna[idx],
        ) {
            (Some(humedo_tara), Some(tara)) => Some(round2(humedo_tara - tara)),
            _ => None,
        }
    })
}

/// Reference moisture content for one column, in percent. Absent when an
/// input is missing or the dry soil mass is zero or not finite.
pub fn humedad_columna(record: &CbrRecord, columna: usize) -> Option<f64> {
    let masa_humeda = masa_suelo_humedo_por_columna(record)[columna]?;
    let seca_tara_constante = record.masa_suelo_seco_tara_constante_g_por_columna[columna]?;
    let tara = record.masa_tara_g_por_columna[columna]?;

    let masa_seca = seca_tara_constante - tara;
    if !masa_seca.is_finite() || masa_seca == 0.0 {
        return None;
    }

    Some(round2(((masa_humeda - masa_seca) / masa_seca) * 100.0))
}

/// Classify a moisture value against the target optimum moisture
pub fn clasificar(valor: Option<f64>, objetivo: Option<f64>) -> Estado {
    match (valor, objetivo) {
        (Some(v), Some(o)) if (v - o).abs() <= TOLERANCIA_HUMEDAD => Estado::Cumple,
        (Some(_), Some(_)) => Estado::NoCumple,
        _ => Estado::NoDisponible,
    }
}

fn filas(record: &CbrRecord, saturacion: Saturacion) -> Vec<FilaResumen> {
    Especimen::TODOS
        .iter()
        .map(|&especimen| {
            let valor = humedad_columna(record, saturacion.columna(especimen));
            FilaResumen {
                muestra: especimen.etiqueta(),
                valor,
                estado: clasificar(valor, record.optimo_contenido_humedad),
            }
        })
        .collect()
}

/// Build both summary tables from the current record
pub fn resumen_humedad(record: &CbrRecord) -> ResumenHumedad {
    ResumenHumedad {
        sin_saturar: filas(record, Saturacion::SinSaturar),
        saturado: filas(record, Saturacion::Saturado),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One specimen worth of readings in column 0: tare 100 g, wet
    // soil+tare 220 g, dry-constant+tare 200 g -> wet 120 g, dry 100 g,
    // moisture 20%.
    fn record_with_column0() -> CbrRecord {
        let mut record = CbrRecord::new();
        record.masa_tara_g_por_columna[0] = Some(100.0);
        record.masa_suelo_humedo_tara_g_por_columna[0] = Some(220.0);
        record.masa_suelo_seco_tara_constante_g_por_columna[0] = Some(200.0);
        record
    }

    #[test]
    fn test_wet_soil_mass_per_column() {
        let record = record_with_column0();
        let masas = masa_suelo_humedo_por_columna(&record);
        assert_eq!(masas[0], Some(120.0));
        assert_eq!(masas[1], None);
    }

    #[test]
    fn test_moisture_for_complete_column() {
        let record = record_with_column0();
        assert_eq!(humedad_columna(&record, 0), Some(20.0));
        assert_eq!(humedad_columna(&record, 1), None);
    }

    #[test]
    fn test_zero_dry_mass_is_absent() {
        let mut record = record_with_column0();
        // dry-constant+tare equal to tare -> dry mass 0
        record.masa_suelo_seco_tara_constante_g_por_columna[0] = Some(100.0);
        assert_eq!(humedad_columna(&record, 0), None);
    }

    #[test]
    fn test_classification_band_is_inclusive() {
        assert_eq!(clasificar(Some(18.0), Some(20.0)), Estado::Cumple);
        assert_eq!(clasificar(Some(22.0), Some(20.0)), Estado::Cumple);
        assert_eq!(clasificar(Some(17.0), Some(20.0)), Estado::NoCumple);
        assert_eq!(clasificar(Some(23.0), Some(20.0)), Estado::NoCumple);
    }

    #[test]
    fn test_classification_needs_both_operands() {
        assert_eq!(clasificar(None, Some(20.0)), Estado::NoDisponible);
        assert_eq!(clasificar(Some(18.0), None), Estado::NoDisponible);
        assert_eq!(clasificar(None, None), Estado::NoDisponible);
    }

    #[test]
    fn test_resumen_maps_specimens_to_columns() {
        let mut record = record_with_column0();
        record.optimo_contenido_humedad = Some(20.0);
        // saturated reading for specimen 1 in column 1
        record.masa_tara_g_por_columna[1] = Some(100.0);
        record.masa_suelo_humedo_tara_g_por_columna[1] = Some(230.0);
        record.masa_suelo_seco_tara_constante_g_por_columna[1] = Some(200.0);

        let resumen = resumen_humedad(&record);
        assert_eq!(resumen.sin_saturar.len(), 3);
        assert_eq!(resumen.saturado.len(), 3);

        assert_eq!(resumen.sin_saturar[0].muestra, "Esp.01");
        assert_eq!(resumen.sin_saturar[0].valor, Some(20.0));
        assert_eq!(resumen.sin_saturar[0].estado, Estado::Cumple);

        assert_eq!(resumen.saturado[0].valor, Some(30.0));
        assert_eq!(resumen.saturado[0].estado, Estado::NoCumple);

        // untouched specimens stay undetermined
        assert_eq!(resumen.sin_saturar[1].valor, None);
        assert_eq!(resumen.sin_saturar[1].estado, Estado::NoDisponible);
    }

    #[test]
    fn test_estado_display() {
        assert_eq!(Estado::Cumple.to_string(), "Cumple");
        assert_eq!(Estado::NoCumple.to_string(), "No cumple");
        assert_eq!(Estado::NoDisponible.to_string(), "-");
    }
}
