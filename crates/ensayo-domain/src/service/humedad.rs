//! Derived values for the moisture content form
//!
//! Formulas from the report template: water mass (row 7 = row 3 - row 5),
//! dry sample mass (row 8 = row 5 - row 6) and moisture content
//! (row 9 = row 7 / row 8 * 100). Every result is rounded to 2 decimals,
//! half away from zero, and absent whenever an input is missing.

use crate::model::HumedadRecord;

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Water mass in grams: wet sample+container minus dry-at-constant-weight
/// sample+container
pub fn masa_agua(masa_humeda: Option<f64>, masa_seca_constante: Option<f64>) -> Option<f64> {
    match (masa_humeda, masa_seca_constante) {
        (Some(h), Some(sc)) => Some(round2(h - sc)),
        _ => None,
    }
}

/// Dry soil mass in grams: dry-at-constant-weight sample+container minus
/// container
pub fn masa_muestra_seca(
    masa_seca_constante: Option<f64>,
    masa_recipiente: Option<f64>,
) -> Option<f64> {
    match (masa_seca_constante, masa_recipiente) {
        (Some(sc), Some(r)) => Some(round2(sc - r)),
        _ => None,
    }
}

/// Moisture content in percent. A zero dry mass makes the quotient
/// undefined, which is reported as absence, same as a missing input.
pub fn contenido_humedad(masa_agua: Option<f64>, masa_muestra_seca: Option<f64>) -> Option<f64> {
    match (masa_agua, masa_muestra_seca) {
        (Some(agua), Some(seca)) if seca != 0.0 => Some(round2((agua / seca) * 100.0)),
        _ => None,
    }
}

/// Net wet sample mass (wet sample+container minus container), the value
/// checked against the ASTM minimum-mass table
pub fn masa_muestra_neta(masa_humeda: Option<f64>, masa_recipiente: Option<f64>) -> Option<f64> {
    match (masa_humeda, masa_recipiente) {
        (Some(h), Some(r)) => Some(round2(h - r)),
        _ => None,
    }
}

/// The computed fields of a moisture record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumedadDerivado {
    pub masa_agua: Option<f64>,
    pub masa_muestra_seca: Option<f64>,
    pub contenido_humedad: Option<f64>,
    pub masa_muestra_neta: Option<f64>,
}

/// Recompute every derived field from the record's raw masses
pub fn derive_humedad(record: &HumedadRecord) -> HumedadDerivado {
    let agua = masa_agua(
        record.masa_recipiente_muestra_humeda,
        record.masa_recipiente_muestra_seca_constante,
    );
    let seca = masa_muestra_seca(
        record.masa_recipiente_muestra_seca_constante,
        record.masa_recipiente,
    );
    HumedadDerivado {
        masa_agua: agua,
        masa_muestra_seca: seca,
        contenido_humedad: contenido_humedad(agua, seca),
        masa_muestra_neta: masa_muestra_neta(
            record.masa_recipiente_muestra_humeda,
            record.masa_recipiente,
        ),
    }
}

/// Return the record with its derived fields recomputed. Stale overrides
/// are cleared: a derived field survives only if it is computable now.
pub fn aplicar_derivados(mut record: HumedadRecord) -> HumedadRecord {
    let derivado = derive_humedad(&record);
    record.masa_agua = derivado.masa_agua;
    record.masa_muestra_seca = derivado.masa_muestra_seca;
    record.contenido_humedad = derivado.contenido_humedad;
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(humeda: Option<f64>, seca_constante: Option<f64>, recipiente: Option<f64>) -> HumedadRecord {
        HumedadRecord {
            masa_recipiente_muestra_humeda: humeda,
            masa_recipiente_muestra_seca_constante: seca_constante,
            masa_recipiente: recipiente,
            ..Default::default()
        }
    }

    #[test]
    fn test_full_derivation() {
        let d = derive_humedad(&record(Some(50.0), Some(40.0), Some(10.0)));
        assert_eq!(d.masa_agua, Some(10.0));
        assert_eq!(d.masa_muestra_seca, Some(30.0));
        assert_eq!(d.contenido_humedad, Some(33.33));
        assert_eq!(d.masa_muestra_neta, Some(40.0));
    }

    #[test]
    fn test_missing_input_yields_absent() {
        let d = derive_humedad(&record(Some(50.0), None, Some(10.0)));
        assert_eq!(d.masa_agua, None);
        assert_eq!(d.masa_muestra_seca, None);
        assert_eq!(d.contenido_humedad, None);
        assert_eq!(d.masa_muestra_neta, Some(40.0));
    }

    #[test]
    fn test_zero_dry_mass_is_undefined_not_infinite() {
        // seca constante == recipiente -> dry mass 0
        let d = derive_humedad(&record(Some(50.0), Some(10.0), Some(10.0)));
        assert_eq!(d.masa_muestra_seca, Some(0.0));
        assert_eq!(d.contenido_humedad, None);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round2(12.345), 12.35);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(-0.005), -0.01);
        assert_eq!(round2(2.345), 2.35);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_water_mass_rounding_at_boundary() {
        let d = masa_agua(Some(52.345), Some(40.0));
        assert_eq!(d, Some(12.35));
    }

    #[test]
    fn test_aplicar_clears_stale_overrides() {
        let mut r = record(None, None, None);
        r.contenido_humedad = Some(99.0);
        let r = aplicar_derivados(r);
        assert_eq!(r.contenido_humedad, None);
    }

    #[test]
    fn test_negative_water_mass_allowed() {
        // entry mistakes produce negative masses; the formula reports them
        let d = derive_humedad(&record(Some(40.0), Some(50.0), Some(10.0)));
        assert_eq!(d.masa_agua, Some(-10.0));
        assert_eq!(d.contenido_humedad, Some(-25.0));
    }
}
