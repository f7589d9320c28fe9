//! Form finalization and persistence
//!
//! "Finalize" is what happens when the technician leaves a field or saves
//! the form: free-text codes and dates are canonicalized, restricted
//! fields are snapped to their allowed values, and the derived masses are
//! recomputed. Finalization never rejects input; validation is a separate
//! step that only gates saving.

use chrono::{Datelike, NaiveDate};

use ensayo_domain::model::{CbrRecord, HumedadRecord};
use ensayo_domain::service::{
    aplicar_derivados, normalize_codigos, normalize_flexible_date, normalize_golpes,
    normalize_muestra_code, normalize_numero_ot_code,
};
use ensayo_store::{EnsayoKind, EnsayoStore};
use ensayo_types::{Error, Result};

const FILAS_PENETRACION: usize = 12;
const FILAS_HINCHAMIENTO: usize = 6;

fn normalize_fecha_opt(value: &mut Option<String>, year: i32) {
    if let Some(raw) = value.take() {
        let normalized = normalize_flexible_date(&raw, year);
        *value = if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        };
    }
}

/// Canonicalize every free-text field of a moisture record and recompute
/// its derived values. `today` supplies the year injected into shorthand
/// codes and dates.
pub fn finalize_humedad(mut record: HumedadRecord, today: NaiveDate) -> HumedadRecord {
    let year = today.year();

    record.muestra = normalize_muestra_code(&record.muestra, year);
    record.numero_ot = normalize_numero_ot_code(&record.numero_ot, year);
    record.fecha_ensayo = normalize_flexible_date(&record.fecha_ensayo, year);
    normalize_fecha_opt(&mut record.revisado_fecha, year);
    normalize_fecha_opt(&mut record.aprobado_fecha, year);

    aplicar_derivados(record)
}

/// Canonicalize a CBR record: codes, dates, blow counts, equipment codes,
/// and the fixed-length reading tables.
pub fn finalize_cbr(mut record: CbrRecord, today: NaiveDate) -> CbrRecord {
    let year = today.year();

    record.muestra = normalize_muestra_code(&record.muestra, year);
    record.numero_ot = normalize_numero_ot_code(&record.numero_ot, year);
    record.fecha_ensayo = normalize_flexible_date(&record.fecha_ensayo, year);
    normalize_fecha_opt(&mut record.revisado_fecha, year);
    normalize_fecha_opt(&mut record.aprobado_fecha, year);

    record.golpes_por_especimen = normalize_golpes(&record.golpes_por_especimen);
    record.codigo_molde_por_especimen = normalize_codigos(&record.codigo_molde_por_especimen);
    record.codigo_tara_por_columna = normalize_codigos(&record.codigo_tara_por_columna);

    // The report tables have a fixed number of rows; pad short input and
    // drop anything beyond the printable area.
    record
        .lecturas_penetracion
        .resize_with(FILAS_PENETRACION, Default::default);
    record
        .hinchamiento
        .resize_with(FILAS_HINCHAMIENTO, Default::default);
    for fila in &mut record.hinchamiento {
        normalize_fecha_opt(&mut fila.fecha, year);
    }

    record
}

/// A record must carry its identifying codes before it can be saved.
pub fn validar_humedad(record: &HumedadRecord) -> Result<()> {
    if record.muestra.trim().is_empty() {
        return Err(Error::MissingField("muestra"));
    }
    if record.numero_ot.trim().is_empty() {
        return Err(Error::MissingField("numero_ot"));
    }
    if record.realizado_por.trim().is_empty() {
        return Err(Error::MissingField("realizado_por"));
    }
    Ok(())
}

pub fn validar_cbr(record: &CbrRecord) -> Result<()> {
    if record.muestra.trim().is_empty() {
        return Err(Error::MissingField("muestra"));
    }
    if record.numero_ot.trim().is_empty() {
        return Err(Error::MissingField("numero_ot"));
    }
    if record.realizado_por.trim().is_empty() {
        return Err(Error::MissingField("realizado_por"));
    }
    Ok(())
}

/// Finalize, validate and persist a moisture record, returning its id.
pub fn save_humedad(
    store: &mut EnsayoStore,
    record: HumedadRecord,
    today: NaiveDate,
) -> Result<u64> {
    let record = finalize_humedad(record, today);
    validar_humedad(&record)?;

    store.insert(
        EnsayoKind::Humedad,
        record.muestra.clone(),
        record.numero_ot.clone(),
        record.contenido_humedad,
        serde_json::to_value(&record)?,
    )
}

/// Finalize, validate and persist a CBR record, returning its id.
pub fn save_cbr(store: &mut EnsayoStore, record: CbrRecord, today: NaiveDate) -> Result<u64> {
    let record = finalize_cbr(record, today);
    validar_cbr(&record)?;

    store.insert(
        EnsayoKind::Cbr,
        record.muestra.clone(),
        record.numero_ot.clone(),
        None,
        serde_json::to_value(&record)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn test_finalize_humedad_normalizes_and_derives() {
        let mut record = HumedadRecord::new(today());
        record.muestra = "123".to_string();
        record.numero_ot = "ot-45".to_string();
        record.fecha_ensayo = "503".to_string();
        record.masa_recipiente_muestra_humeda = Some(50.0);
        record.masa_recipiente_muestra_seca_constante = Some(40.0);
        record.masa_recipiente = Some(10.0);

        let record = finalize_humedad(record, today());
        assert_eq!(record.muestra, "123-SU-25");
        assert_eq!(record.numero_ot, "45-25");
        assert_eq!(record.fecha_ensayo, "05/03/25");
        assert_eq!(record.masa_agua, Some(10.0));
        assert_eq!(record.masa_muestra_seca, Some(30.0));
        assert_eq!(record.contenido_humedad, Some(33.33));
    }

    #[test]
    fn test_finalize_cbr_snaps_restricted_fields_and_pads_tables() {
        let mut record = CbrRecord::new();
        record.golpes_por_especimen = [Some(56.0), Some(99.0), Some(10.0)];
        record.codigo_molde_por_especimen =
            [Some("INS-175".to_string()), Some("XX-9".to_string()), None];
        record.lecturas_penetracion.truncate(4);
        record.hinchamiento.clear();

        let record = finalize_cbr(record, today());
        assert_eq!(record.golpes_por_especimen, [Some(56.0), None, Some(10.0)]);
        assert_eq!(
            record.codigo_molde_por_especimen,
            [
                Some("INS-175".to_string()),
                Some("-".to_string()),
                Some("-".to_string())
            ]
        );
        assert_eq!(record.lecturas_penetracion.len(), 12);
        assert_eq!(record.hinchamiento.len(), 6);
    }

    #[test]
    fn test_validar_requires_identity_fields() {
        let record = HumedadRecord::new(today());
        assert!(matches!(
            validar_humedad(&record),
            Err(Error::MissingField("muestra"))
        ));

        let mut record = CbrRecord::new();
        record.muestra = "12-SU-25".to_string();
        assert!(matches!(
            validar_cbr(&record),
            Err(Error::MissingField("numero_ot"))
        ));
    }

    #[test]
    fn test_save_humedad_stores_headline_result() {
        let dir = tempdir().unwrap();
        let mut store = EnsayoStore::open(dir.path().to_path_buf()).unwrap();

        let mut record = HumedadRecord::new(today());
        record.muestra = "123".to_string();
        record.numero_ot = "45".to_string();
        record.realizado_por = "J. QUISPE".to_string();
        record.masa_recipiente_muestra_humeda = Some(50.0);
        record.masa_recipiente_muestra_seca_constante = Some(40.0);
        record.masa_recipiente = Some(10.0);

        let id = save_humedad(&mut store, record, today()).unwrap();
        let entry = store.get(id).unwrap();
        assert_eq!(entry.muestra, "123-SU-25");
        assert_eq!(entry.contenido_humedad, Some(33.33));
        assert_eq!(entry.payload["fecha_ensayo"], "07/03/25");
    }
}
