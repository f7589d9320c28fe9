//! Output formatting module

use ensayo_domain::model::{CbrRecord, HumedadRecord};
use ensayo_domain::reference::equipo_label;
use ensayo_domain::service::{FilaResumen, ResumenHumedad};
use ensayo_store::EnsayoEntry;
use ensayo_types::{OutputFormat, Result};

fn opt_number(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

fn opt_text(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

pub fn output_humedad(output_format: OutputFormat, record: &HumedadRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(record)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nContenido de Humedad (ASTM D2216)");
    println!("=================================");
    println!("Muestra:         {}", record.muestra);
    println!("N° OT:           {}", record.numero_ot);
    println!("Fecha de ensayo: {}", record.fecha_ensayo);
    println!("Realizado por:   {}", record.realizado_por);

    println!("\n--- Datos del ensayo ---");
    println!(
        "Recipiente N°:                  {}",
        opt_text(record.recipiente_numero.as_deref())
    );
    println!(
        "Recipiente + muestra húmeda:    {} g",
        opt_number(record.masa_recipiente_muestra_humeda)
    );
    println!(
        "Recipiente + muestra seca:      {} g",
        opt_number(record.masa_recipiente_muestra_seca)
    );
    println!(
        "Recipiente + seca constante:    {} g",
        opt_number(record.masa_recipiente_muestra_seca_constante)
    );
    println!(
        "Recipiente:                     {} g",
        opt_number(record.masa_recipiente)
    );

    println!("\n--- Resultados ---");
    println!("Masa de agua:          {} g", opt_number(record.masa_agua));
    println!(
        "Masa de muestra seca:  {} g",
        opt_number(record.masa_muestra_seca)
    );
    println!(
        "Contenido de humedad:  {} %",
        opt_number(record.contenido_humedad)
    );

    if let Some(ref obs) = record.observaciones {
        println!("\nObservaciones:");
        println!("{}", obs);
    }

    Ok(())
}

fn print_resumen_rows(filas: &[FilaResumen]) {
    for fila in filas {
        println!(
            "  {}  {:>8}  {}",
            fila.muestra,
            opt_number(fila.valor),
            fila.estado
        );
    }
}

pub fn output_cbr(
    output_format: OutputFormat,
    record: &CbrRecord,
    resumen: &ResumenHumedad,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "record": record,
            "resumen_humedad": resumen,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nCBR (ASTM D1883)");
    println!("================");
    println!("Muestra:         {}", record.muestra);
    println!("N° OT:           {}", record.numero_ot);
    println!("Fecha de ensayo: {}", record.fecha_ensayo);
    println!("Realizado por:   {}", record.realizado_por);

    println!("\n--- Compactación ---");
    for (i, (golpes, molde)) in record
        .golpes_por_especimen
        .iter()
        .zip(&record.codigo_molde_por_especimen)
        .enumerate()
    {
        let molde = opt_text(molde.as_deref());
        let etiqueta = equipo_label(molde)
            .map(|label| format!(" ({})", label))
            .unwrap_or_default();
        println!(
            "Esp.{:02}: {:>4} golpes, molde {}{}",
            i + 1,
            golpes
                .map(|g| format!("{:.0}", g))
                .unwrap_or_else(|| "-".to_string()),
            molde,
            etiqueta
        );
    }

    println!(
        "\nÓptimo contenido de humedad: {} %",
        opt_number(record.optimo_contenido_humedad)
    );
    println!("Tolerancia: ±2.00 %");

    println!("\n--- Humedad sin saturar ---");
    print_resumen_rows(&resumen.sin_saturar);
    println!("--- Humedad saturado ---");
    print_resumen_rows(&resumen.saturado);

    if let Some(ref obs) = record.observaciones {
        println!("\nObservaciones:");
        println!("{}", obs);
    }

    Ok(())
}

pub fn output_tm(
    output_format: OutputFormat,
    tamano: &str,
    minimo: Option<u32>,
    masa: Option<f64>,
    cumple: Option<bool>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "tamano": tamano,
            "masa_minima_g": minimo,
            "masa_muestra_g": masa,
            "cumple": cumple,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nMasa mínima de ensayo");
    println!("=====================");
    println!("Tamaño máximo:  {}", tamano);
    match minimo {
        Some(m) => println!("Masa mínima:    {} g", m),
        None => println!("Masa mínima:    (tamaño no reconocido)"),
    }
    if let Some(m) = masa {
        println!("Masa muestra:   {:.2} g", m);
    }
    if let Some(ok) = cumple {
        println!("Cumple:         {}", if ok { "SI" } else { "NO" });
    }

    Ok(())
}

pub fn output_entries(output_format: OutputFormat, entries: &[&EnsayoEntry]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(entries)?;
        println!("{}", content);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No saved records");
        return Ok(());
    }

    println!(
        "{:>4}  {:<8}  {:<14}  {:<10}  {:>10}  {}",
        "ID", "Tipo", "Muestra", "N° OT", "Humedad %", "Guardado"
    );
    for entry in entries {
        println!(
            "{:>4}  {:<8}  {:<14}  {:<10}  {:>10}  {}",
            entry.id,
            entry.kind.to_string(),
            entry.muestra,
            entry.numero_ot,
            opt_number(entry.contenido_humedad),
            entry.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}

pub fn output_entry(output_format: OutputFormat, entry: &EnsayoEntry) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(entry)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nRecord {}", entry.id);
    println!("========={}", "=".repeat(entry.id.to_string().len()));
    println!("Tipo:      {}", entry.kind);
    println!("Muestra:   {}", entry.muestra);
    println!("N° OT:     {}", entry.numero_ot);
    println!("Humedad:   {} %", opt_number(entry.contenido_humedad));
    println!("Creado:    {}", entry.created_at.to_rfc3339());
    println!("Payload:");
    println!("{}", serde_json::to_string_pretty(&entry.payload)?);

    Ok(())
}
