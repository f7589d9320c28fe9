//! Command handlers

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use ensayo_app::app::{
    finalize_cbr, finalize_humedad, save_cbr, save_humedad, validar_cbr, validar_humedad,
};
use ensayo_app::config::Config;
use ensayo_app::export::{export_cbr_to_excel, export_humedad_to_excel, report_filename};
use ensayo_app::repository::{open_store, open_store_at};
use ensayo_domain::model::{CbrRecord, HumedadRecord};
use ensayo_domain::service::{cumple_masa_minima, masa_minima, resumen_humedad};
use ensayo_store::{EnsayoKind, EnsayoStore};
use ensayo_types::{Error, OutputFormat, Result, StoreError};

use crate::cli::{Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Humedad {
            input,
            save,
            output,
        } => cmd_humedad(
            &cli,
            &config,
            input.clone(),
            *save,
            output.clone(),
            output_format,
        ),

        Commands::Cbr {
            input,
            save,
            output,
        } => cmd_cbr(
            &cli,
            &config,
            input.clone(),
            *save,
            output.clone(),
            output_format,
        ),

        Commands::Tm { tamano, masa } => cmd_tm(tamano, *masa, output_format),

        Commands::List => cmd_list(&cli, &config, output_format),

        Commands::Show { id } => cmd_show(&cli, &config, *id, output_format),

        Commands::Export { id, output } => cmd_export(&cli, &config, *id, output.clone()),

        Commands::Delete { id } => cmd_delete(&cli, &config, *id),

        Commands::Config {
            show,
            set_output,
            set_revisado_por,
            set_aprobado_por,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            set_revisado_por.clone(),
            set_aprobado_por.clone(),
            *reset,
        ),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn open_configured_store(cli: &Cli, config: &Config) -> Result<EnsayoStore> {
    match &cli.store_dir {
        Some(dir) => open_store_at(dir.clone()),
        None => open_store(config),
    }
}

fn read_record_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn cmd_humedad(
    cli: &Cli,
    config: &Config,
    input: PathBuf,
    save: bool,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let content = read_record_file(&input)?;
    let record: HumedadRecord = serde_json::from_str(&content)?;
    let record = finalize_humedad(record, today());

    output::output_humedad(output_format, &record)?;

    if let Some(path) = output {
        export_humedad_to_excel(&record, &path)?;
        if cli.verbose {
            eprintln!("Exported to {}", path.display());
        }
    }

    if save {
        validar_humedad(&record)?;
        let mut store = open_configured_store(cli, config)?;
        let id = save_humedad(&mut store, record, today())?;
        eprintln!("Saved as record {}", id);
    }

    Ok(())
}

fn cmd_cbr(
    cli: &Cli,
    config: &Config,
    input: PathBuf,
    save: bool,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let content = read_record_file(&input)?;
    let record: CbrRecord = serde_json::from_str(&content)?;
    let record = finalize_cbr(record, today());

    let resumen = resumen_humedad(&record);
    output::output_cbr(output_format, &record, &resumen)?;

    if let Some(path) = output {
        export_cbr_to_excel(&record, &path)?;
        if cli.verbose {
            eprintln!("Exported to {}", path.display());
        }
    }

    if save {
        validar_cbr(&record)?;
        let mut store = open_configured_store(cli, config)?;
        let id = save_cbr(&mut store, record, today())?;
        eprintln!("Saved as record {}", id);
    }

    Ok(())
}

fn cmd_tm(tamano: &str, masa: Option<f64>, output_format: OutputFormat) -> Result<()> {
    let minimo = masa_minima(tamano);
    let cumple = masa.and_then(|m| cumple_masa_minima(Some(m), tamano));
    output::output_tm(output_format, tamano, minimo, masa, cumple)
}

fn cmd_list(cli: &Cli, config: &Config, output_format: OutputFormat) -> Result<()> {
    let store = open_configured_store(cli, config)?;
    output::output_entries(output_format, &store.list())
}

fn cmd_show(cli: &Cli, config: &Config, id: u64, output_format: OutputFormat) -> Result<()> {
    let store = open_configured_store(cli, config)?;
    let entry = store.get(id).ok_or(StoreError::NotFound(id))?;
    output::output_entry(output_format, entry)
}

fn cmd_export(cli: &Cli, config: &Config, id: u64, output: Option<PathBuf>) -> Result<()> {
    let store = open_configured_store(cli, config)?;
    let entry = store.get(id).ok_or(StoreError::NotFound(id))?;

    let path = output
        .unwrap_or_else(|| PathBuf::from(report_filename(entry.kind, &entry.numero_ot, today())));

    match entry.kind {
        EnsayoKind::Humedad => {
            let record: HumedadRecord = serde_json::from_value(entry.payload.clone())?;
            export_humedad_to_excel(&record, &path)?;
        }
        EnsayoKind::Cbr => {
            let record: CbrRecord = serde_json::from_value(entry.payload.clone())?;
            export_cbr_to_excel(&record, &path)?;
        }
    }

    eprintln!("Exported record {} to {}", id, path.display());
    Ok(())
}

fn cmd_delete(cli: &Cli, config: &Config, id: u64) -> Result<()> {
    let mut store = open_configured_store(cli, config)?;
    store.delete(id)?;
    eprintln!("Deleted record {}", id);
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_revisado_por: Option<String>,
    set_aprobado_por: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(name) = set_revisado_por {
        config.revisado_por = name;
        changed = true;
    }
    if let Some(name) = set_aprobado_por {
        config.aprobado_por = name;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
