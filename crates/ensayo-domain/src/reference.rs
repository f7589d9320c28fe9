//! Static reference tables consulted by both forms
//!
//! Process-wide read-only constants. There is no mutation API: the lab
//! catalogs change by editing this file, not at runtime.

/// Row of the ASTM D2216 minimum-mass table
#[derive(Debug, Clone, Copy)]
pub struct TamanoMasaEntry {
    /// Nominal maximum particle size label, in inches or sieve number
    pub tm: &'static str,
    /// Minimum recommended specimen mass in grams
    pub masa_g: u32,
}

/// Maximum particle size vs minimum recommended specimen mass (ASTM D2216)
pub const TABLA_TM: [TamanoMasaEntry; 10] = [
    TamanoMasaEntry { tm: "3", masa_g: 5000 },
    TamanoMasaEntry { tm: "2 1/2", masa_g: 5000 },
    TamanoMasaEntry { tm: "2", masa_g: 5000 },
    TamanoMasaEntry { tm: "1 1/2", masa_g: 1000 },
    TamanoMasaEntry { tm: "1", masa_g: 1000 },
    TamanoMasaEntry { tm: "3/4", masa_g: 250 },
    TamanoMasaEntry { tm: "1/2", masa_g: 250 },
    TamanoMasaEntry { tm: "3/8", masa_g: 500 },
    TamanoMasaEntry { tm: "N°4", masa_g: 100 },
    TamanoMasaEntry { tm: "N°10", masa_g: 20 },
];

/// Mold/tare code catalog entry
#[derive(Debug, Clone, Copy)]
pub struct MoldCodeEntry {
    pub codigo: &'static str,
    pub equipo: &'static str,
}

/// Registered mold codes and their display labels
pub const MOLD_CODE_REFERENCE: [MoldCodeEntry; 18] = [
    MoldCodeEntry { codigo: "INS-173", equipo: "MOLDE 11" },
    MoldCodeEntry { codigo: "INS-174", equipo: "MOLDE 12" },
    MoldCodeEntry { codigo: "INS-175", equipo: "MOLDE 13" },
    MoldCodeEntry { codigo: "INS-030", equipo: "MOLDE 1" },
    MoldCodeEntry { codigo: "INS-031", equipo: "MOLDE 2" },
    MoldCodeEntry { codigo: "INS-032", equipo: "MOLDE 3" },
    MoldCodeEntry { codigo: "INS-027", equipo: "MOLDE 4" },
    MoldCodeEntry { codigo: "INS-028", equipo: "MOLDE 5" },
    MoldCodeEntry { codigo: "INS-029", equipo: "MOLDE 6" },
    MoldCodeEntry { codigo: "INS-033", equipo: "MOLDE 7" },
    MoldCodeEntry { codigo: "INS-034", equipo: "MOLDE 8" },
    MoldCodeEntry { codigo: "INS-035", equipo: "MOLDE 9" },
    MoldCodeEntry { codigo: "INS-200", equipo: "MOLDE A" },
    MoldCodeEntry { codigo: "INS-201", equipo: "MOLDE B" },
    MoldCodeEntry { codigo: "INS-202", equipo: "MOLDE C" },
    MoldCodeEntry { codigo: "INS-203", equipo: "MOLDE E" },
    MoldCodeEntry { codigo: "INS-204", equipo: "MOLDE H" },
    MoldCodeEntry { codigo: "INS-205", equipo: "MOLDE L" },
];

/// Placeholder accepted everywhere a code dropdown can be left unset
pub const CODIGO_SIN_ASIGNAR: &str = "-";

/// Generic code accepted in addition to the registered catalog
pub const CODIGO_GENERICO: &str = "INS-000";

/// Whether `value` belongs to the code dropdown domain
pub fn is_valid_codigo(value: &str) -> bool {
    value == CODIGO_SIN_ASIGNAR
        || value == CODIGO_GENERICO
        || MOLD_CODE_REFERENCE.iter().any(|e| e.codigo == value)
}

/// Display label for a mold/tare code, if registered
pub fn equipo_label(codigo: &str) -> Option<&'static str> {
    MOLD_CODE_REFERENCE
        .iter()
        .find(|e| e.codigo == codigo)
        .map(|e| e.equipo)
}

/// Blow counts the CBR compaction procedure allows per specimen
pub const GOLPES_PERMITIDOS: [u32; 3] = [56, 25, 10];

/// Fixed penetration-reading schedule row (time, inches, millimetres)
#[derive(Debug, Clone, Copy)]
pub struct PenetracionBase {
    pub tiempo: &'static str,
    pub pulg: f64,
    pub mm: f64,
}

/// The 12 fixed penetration steps of the CBR reading table
pub const PENETRACION_BASE: [PenetracionBase; 12] = [
    PenetracionBase { tiempo: "0:00", pulg: 0.0, mm: 0.0 },
    PenetracionBase { tiempo: "0:30", pulg: 0.025, mm: 0.64 },
    PenetracionBase { tiempo: "1:00", pulg: 0.05, mm: 1.3 },
    PenetracionBase { tiempo: "1:30", pulg: 0.075, mm: 1.9 },
    PenetracionBase { tiempo: "2:00", pulg: 0.1, mm: 2.5 },
    PenetracionBase { tiempo: "2:30", pulg: 0.125, mm: 3.18 },
    PenetracionBase { tiempo: "3:00", pulg: 0.15, mm: 3.8 },
    PenetracionBase { tiempo: "3:30", pulg: 0.175, mm: 4.45 },
    PenetracionBase { tiempo: "4:00", pulg: 0.2, mm: 5.1 },
    PenetracionBase { tiempo: "6:00", pulg: 0.3, mm: 7.6 },
    PenetracionBase { tiempo: "8:00", pulg: 0.4, mm: 10.0 },
    PenetracionBase { tiempo: "10:00", pulg: 0.5, mm: 13.0 },
];

// Equipment dropdown catalogs, per form field. First entry is always the
// unset placeholder.

pub const EQUIPO_BALANZA_01: [&str; 2] = ["-", "EQP-0046"];
pub const EQUIPO_BALANZA_001: [&str; 2] = ["-", "EQP-0045"];
pub const EQUIPO_HORNO: [&str; 2] = ["-", "EQP-0049"];
pub const EQUIPO_CBR: [&str; 2] = ["-", "EQP-0026"];
pub const EQUIPO_DIAL_DEFORMACION: [&str; 2] = ["-", "EQP-0080"];
pub const EQUIPO_DIAL_EXPANSION: [&str; 2] = ["-", "EQP-0109"];
pub const EQUIPO_PISON: [&str; 2] = ["-", "INS-0196"];
pub const EQUIPO_BALANZA_1G: [&str; 2] = ["-", "EQP-0054"];

/// Method A / Method B fixed rows of the moisture form (size, minimum
/// mass, balance readability)
#[derive(Debug, Clone, Copy)]
pub struct MetodoFilaBase {
    pub tamano: &'static str,
    pub masa: &'static str,
    pub legibilidad: &'static str,
}

pub const METODO_A_FILAS: [MetodoFilaBase; 3] = [
    MetodoFilaBase { tamano: "3 in", masa: "5 kg", legibilidad: "0.1 g" },
    MetodoFilaBase { tamano: "1 1/2 in", masa: "1 kg", legibilidad: "0.1 g" },
    MetodoFilaBase { tamano: "3/4 in", masa: "250 g", legibilidad: "0.1 g" },
];

pub const METODO_B_FILAS: [MetodoFilaBase; 3] = [
    MetodoFilaBase { tamano: "3/8 in", masa: "500 g", legibilidad: "0.01 g" },
    MetodoFilaBase { tamano: "No. 4", masa: "250 g", legibilidad: "0.01 g" },
    MetodoFilaBase { tamano: "No. 10", masa: "250 g", legibilidad: "0.01 g" },
];
