//! Excel export functionality

use chrono::NaiveDate;
use ensayo_domain::model::{CbrRecord, Especimen, HumedadRecord};
use ensayo_domain::reference::PENETRACION_BASE;
use ensayo_domain::service::resumen_humedad;
use ensayo_store::EnsayoKind;
use ensayo_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

fn excel_err(e: rust_xlsxwriter::XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// File name for an exported report: `Humedad_45-25_2025-03-07.xlsx`
pub fn report_filename(kind: EnsayoKind, numero_ot: &str, date: NaiveDate) -> String {
    let prefix = match kind {
        EnsayoKind::Humedad => "Humedad",
        EnsayoKind::Cbr => "CBR",
    };
    let ot = if numero_ot.trim().is_empty() {
        "sin-ot".to_string()
    } else {
        numero_ot.replace(['/', '\\', ' '], "-")
    };
    format!("{}_{}_{}.xlsx", prefix, ot, date.format("%Y-%m-%d"))
}

fn write_label_value(
    sheet: &mut Worksheet,
    row: u32,
    label: &str,
    value: &str,
) -> Result<()> {
    sheet.write_string(row, 0, label).map_err(excel_err)?;
    sheet.write_string(row, 1, value).map_err(excel_err)?;
    Ok(())
}

fn write_label_number(
    sheet: &mut Worksheet,
    row: u32,
    label: &str,
    value: Option<f64>,
) -> Result<()> {
    sheet.write_string(row, 0, label).map_err(excel_err)?;
    if let Some(v) = value {
        sheet.write_number(row, 1, v).map_err(excel_err)?;
    }
    Ok(())
}

/// Export a moisture content record to an Excel file
pub fn export_humedad_to_excel(record: &HumedadRecord, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Humedad").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    sheet
        .write_string_with_format(0, 0, "CONTENIDO DE HUMEDAD (ASTM D2216)", &header_format)
        .map_err(excel_err)?;

    write_label_value(sheet, 2, "Muestra:", &record.muestra)?;
    write_label_value(sheet, 3, "N° OT:", &record.numero_ot)?;
    write_label_value(sheet, 4, "Fecha de ensayo:", &record.fecha_ensayo)?;
    write_label_value(sheet, 5, "Realizado por:", &record.realizado_por)?;

    sheet
        .write_string_with_format(7, 0, "Datos del ensayo", &header_format)
        .map_err(excel_err)?;
    write_label_value(
        sheet,
        8,
        "Recipiente N°:",
        record.recipiente_numero.as_deref().unwrap_or("-"),
    )?;
    write_label_number(
        sheet,
        9,
        "Masa recipiente + muestra húmeda (g):",
        record.masa_recipiente_muestra_humeda,
    )?;
    write_label_number(
        sheet,
        10,
        "Masa recipiente + muestra seca (g):",
        record.masa_recipiente_muestra_seca,
    )?;
    write_label_number(
        sheet,
        11,
        "Masa recipiente + muestra seca constante (g):",
        record.masa_recipiente_muestra_seca_constante,
    )?;
    write_label_number(sheet, 12, "Masa recipiente (g):", record.masa_recipiente)?;

    sheet
        .write_string_with_format(14, 0, "Resultados", &header_format)
        .map_err(excel_err)?;
    write_label_number(sheet, 15, "Masa de agua (g):", record.masa_agua)?;
    write_label_number(sheet, 16, "Masa de muestra seca (g):", record.masa_muestra_seca)?;
    write_label_number(sheet, 17, "Contenido de humedad (%):", record.contenido_humedad)?;

    sheet
        .write_string_with_format(19, 0, "Equipo utilizado", &header_format)
        .map_err(excel_err)?;
    write_label_value(
        sheet,
        20,
        "Balanza 0.1 g:",
        record.equipo_balanza_01.as_deref().unwrap_or("-"),
    )?;
    write_label_value(
        sheet,
        21,
        "Balanza 0.01 g:",
        record.equipo_balanza_001.as_deref().unwrap_or("-"),
    )?;
    write_label_value(
        sheet,
        22,
        "Horno:",
        record.equipo_horno.as_deref().unwrap_or("-"),
    )?;

    if let Some(ref obs) = record.observaciones {
        write_label_value(sheet, 24, "Observaciones:", obs)?;
    }

    sheet.set_column_width(0, 42).map_err(excel_err)?;
    sheet.set_column_width(1, 18).map_err(excel_err)?;

    workbook.save(output_path).map_err(excel_err)?;
    Ok(())
}

/// Export a CBR record to an Excel file
pub fn export_cbr_to_excel(record: &CbrRecord, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let general = workbook.add_worksheet();
    write_cbr_general_sheet(general, record)?;

    let humedad = workbook.add_worksheet();
    write_cbr_humedad_sheet(humedad, record)?;

    let penetracion = workbook.add_worksheet();
    write_cbr_penetracion_sheet(penetracion, record)?;

    workbook.save(output_path).map_err(excel_err)?;
    Ok(())
}

fn write_cbr_general_sheet(sheet: &mut Worksheet, record: &CbrRecord) -> Result<()> {
    sheet.set_name("General").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    sheet
        .write_string_with_format(0, 0, "CBR (ASTM D1883)", &header_format)
        .map_err(excel_err)?;

    write_label_value(sheet, 2, "Muestra:", &record.muestra)?;
    write_label_value(sheet, 3, "N° OT:", &record.numero_ot)?;
    write_label_value(sheet, 4, "Fecha de ensayo:", &record.fecha_ensayo)?;
    write_label_value(sheet, 5, "Realizado por:", &record.realizado_por)?;

    write_label_number(
        sheet,
        7,
        "Máxima densidad seca (g/cm³):",
        record.maxima_densidad_seca,
    )?;
    write_label_number(
        sheet,
        8,
        "Óptimo contenido de humedad (%):",
        record.optimo_contenido_humedad,
    )?;

    sheet
        .write_string_with_format(10, 0, "Compactación", &header_format)
        .map_err(excel_err)?;
    sheet.write_string(11, 1, "Golpes").map_err(excel_err)?;
    sheet.write_string(11, 2, "Molde").map_err(excel_err)?;
    for esp in Especimen::TODOS {
        let row = 12 + esp.indice() as u32;
        sheet
            .write_string(row, 0, &esp.etiqueta())
            .map_err(excel_err)?;
        if let Some(golpes) = record.golpes_por_especimen[esp.indice()] {
            sheet.write_number(row, 1, golpes).map_err(excel_err)?;
        }
        if let Some(ref molde) = record.codigo_molde_por_especimen[esp.indice()] {
            sheet.write_string(row, 2, molde).map_err(excel_err)?;
        }
    }

    sheet.set_column_width(0, 34).map_err(excel_err)?;
    Ok(())
}

fn write_cbr_humedad_sheet(sheet: &mut Worksheet, record: &CbrRecord) -> Result<()> {
    sheet.set_name("Humedad").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let column_headers = [
        "Esp.01 SS",
        "Esp.01 SAT",
        "Esp.02 SS",
        "Esp.02 SAT",
        "Esp.03 SS",
        "Esp.03 SAT",
    ];
    for (col, header) in column_headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, (col + 1) as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    let rows: [(&str, &[Option<f64>; 6]); 5] = [
        ("Tara (g)", &record.masa_tara_g_por_columna),
        (
            "Suelo húmedo + tara (g)",
            &record.masa_suelo_humedo_tara_g_por_columna,
        ),
        (
            "Suelo seco + tara (g)",
            &record.masa_suelo_seco_tara_g_por_columna,
        ),
        (
            "Suelo seco + tara constante (g)",
            &record.masa_suelo_seco_tara_constante_g_por_columna,
        ),
        ("Molde + suelo (g)", &record.masa_molde_suelo_g_por_columna),
    ];
    for (row_idx, (label, values)) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet.write_string(row, 0, *label).map_err(excel_err)?;
        for (col, value) in values.iter().enumerate() {
            if let Some(v) = value {
                sheet
                    .write_number(row, (col + 1) as u16, *v)
                    .map_err(excel_err)?;
            }
        }
    }

    let resumen = resumen_humedad(record);
    sheet
        .write_string_with_format(7, 0, "Resumen de humedad", &header_format)
        .map_err(excel_err)?;
    for (row_offset, (titulo, filas)) in [
        ("Sin saturar", &resumen.sin_saturar),
        ("Saturado", &resumen.saturado),
    ]
    .iter()
    .enumerate()
    {
        let row = (8 + row_offset * 4) as u32;
        sheet
            .write_string_with_format(row, 0, *titulo, &header_format)
            .map_err(excel_err)?;
        for (i, fila) in filas.iter().enumerate() {
            let r = row + 1 + i as u32;
            sheet.write_string(r, 0, &fila.muestra).map_err(excel_err)?;
            if let Some(v) = fila.valor {
                sheet.write_number(r, 1, v).map_err(excel_err)?;
            }
            sheet
                .write_string(r, 2, &fila.estado.to_string())
                .map_err(excel_err)?;
        }
    }

    sheet.set_column_width(0, 34).map_err(excel_err)?;
    Ok(())
}

fn write_cbr_penetracion_sheet(sheet: &mut Worksheet, record: &CbrRecord) -> Result<()> {
    sheet.set_name("Penetracion").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Tiempo (min)",
        "Penetración (in)",
        "Penetración (mm)",
        "Tensión estándar",
        "Dial Esp.01",
        "Dial Esp.02",
        "Dial Esp.03",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (row_idx, base) in PENETRACION_BASE.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet.write_string(row, 0, base.tiempo).map_err(excel_err)?;
        sheet.write_number(row, 1, base.pulg).map_err(excel_err)?;
        sheet.write_number(row, 2, base.mm).map_err(excel_err)?;

        if let Some(lectura) = record.lecturas_penetracion.get(row_idx) {
            let values = [
                lectura.tension_standard,
                lectura.lectura_dial_esp_01,
                lectura.lectura_dial_esp_02,
                lectura.lectura_dial_esp_03,
            ];
            for (offset, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    sheet
                        .write_number(row, (3 + offset) as u16, *v)
                        .map_err(excel_err)?;
                }
            }
        }
    }

    sheet.set_column_width(0, 14).map_err(excel_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            report_filename(EnsayoKind::Humedad, "45-25", date),
            "Humedad_45-25_2025-03-07.xlsx"
        );
        assert_eq!(
            report_filename(EnsayoKind::Cbr, "", date),
            "CBR_sin-ot_2025-03-07.xlsx"
        );
    }

    #[test]
    fn test_export_humedad_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let mut record = HumedadRecord::default();
        record.muestra = "123-SU-25".to_string();
        record.contenido_humedad = Some(33.33);

        export_humedad_to_excel(&record, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_cbr_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let record = CbrRecord::new();

        export_cbr_to_excel(&record, &path).unwrap();
        assert!(path.exists());
    }
}
