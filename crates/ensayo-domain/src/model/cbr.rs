//! CBR test record (ASTM D1883)

use serde::{Deserialize, Serialize};

use super::humedad::Condicion;

/// Number of measurement columns: 3 specimens x {unsaturated, saturated}
pub const COLUMNAS: usize = 6;

/// Number of compacted specimens
pub const ESPECIMENES: usize = 3;

/// One of the three compacted specimens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Especimen {
    Uno,
    Dos,
    Tres,
}

impl Especimen {
    pub const TODOS: [Especimen; ESPECIMENES] = [Especimen::Uno, Especimen::Dos, Especimen::Tres];

    pub fn indice(self) -> usize {
        match self {
            Especimen::Uno => 0,
            Especimen::Dos => 1,
            Especimen::Tres => 2,
        }
    }

    /// Row label as printed on the report ("Esp.01", ...)
    pub fn etiqueta(self) -> String {
        format!("Esp.{:02}", self.indice() + 1)
    }
}

/// Saturation state of a measurement column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Saturacion {
    SinSaturar,
    Saturado,
}

impl Saturacion {
    /// Column index for a specimen in this saturation state. Unsaturated
    /// readings occupy columns 0, 2, 4 and saturated ones 1, 3, 5.
    pub fn columna(self, especimen: Especimen) -> usize {
        especimen.indice() * 2
            + match self {
                Saturacion::SinSaturar => 0,
                Saturacion::Saturado => 1,
            }
    }
}

/// One row of the penetration-reading table. The time/inch/mm schedule is
/// fixed (`reference::PENETRACION_BASE`); only the dial readings are entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LecturaPenetracion {
    #[serde(default)]
    pub tension_standard: Option<f64>,
    #[serde(default)]
    pub lectura_dial_esp_01: Option<f64>,
    #[serde(default)]
    pub lectura_dial_esp_02: Option<f64>,
    #[serde(default)]
    pub lectura_dial_esp_03: Option<f64>,
}

/// One row of the swell (hinchamiento) log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilaHinchamiento {
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub hora: Option<String>,
    #[serde(default)]
    pub esp_01: Option<f64>,
    #[serde(default)]
    pub esp_02: Option<f64>,
    #[serde(default)]
    pub esp_03: Option<f64>,
}

/// CBR data-entry record
///
/// The `_por_columna` arrays hold one value per measurement column in the
/// order Esp.01 SS, Esp.01 SAT, Esp.02 SS, Esp.02 SAT, Esp.03 SS,
/// Esp.03 SAT. Masses in grams, temperatures in Celsius.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CbrRecord {
    // Encabezado
    pub muestra: String,
    pub numero_ot: String,
    #[serde(default)]
    pub fecha_ensayo: String,
    pub realizado_por: String,

    // Condiciones del ensayo
    #[serde(default)]
    pub sobretamano_porcentaje: Option<f64>,
    #[serde(default)]
    pub masa_grava_adicionada_g: Option<f64>,
    #[serde(default)]
    pub condicion_muestra_saturado: Condicion,
    #[serde(default)]
    pub condicion_muestra_sin_saturar: Condicion,
    #[serde(default)]
    pub maxima_densidad_seca: Option<f64>,
    #[serde(default)]
    pub optimo_contenido_humedad: Option<f64>,
    #[serde(default)]
    pub temperatura_inicial_c: Option<f64>,
    #[serde(default)]
    pub temperatura_final_c: Option<f64>,
    #[serde(default)]
    pub tamano_maximo_visual_in: Option<String>,
    #[serde(default)]
    pub descripcion_muestra_astm: Option<String>,

    // Por espécimen (longitud 3)
    #[serde(default)]
    pub golpes_por_especimen: [Option<f64>; ESPECIMENES],
    #[serde(default)]
    pub codigo_molde_por_especimen: [Option<String>; ESPECIMENES],

    // Por columna (longitud 6)
    #[serde(default)]
    pub temperatura_inicio_c_por_columna: [Option<f64>; COLUMNAS],
    #[serde(default)]
    pub temperatura_final_c_por_columna: [Option<f64>; COLUMNAS],
    #[serde(default)]
    pub masa_molde_suelo_g_por_columna: [Option<f64>; COLUMNAS],
    #[serde(default)]
    pub codigo_tara_por_columna: [Option<String>; COLUMNAS],
    #[serde(default)]
    pub masa_tara_g_por_columna: [Option<f64>; COLUMNAS],
    #[serde(default)]
    pub masa_suelo_humedo_tara_g_por_columna: [Option<f64>; COLUMNAS],
    #[serde(default)]
    pub masa_suelo_seco_tara_g_por_columna: [Option<f64>; COLUMNAS],
    #[serde(default)]
    pub masa_suelo_seco_tara_constante_g_por_columna: [Option<f64>; COLUMNAS],

    // Lecturas
    #[serde(default)]
    pub lecturas_penetracion: Vec<LecturaPenetracion>,
    #[serde(default)]
    pub hinchamiento: Vec<FilaHinchamiento>,
    #[serde(default)]
    pub profundidad_hendidura_mm: Option<f64>,

    // Equipo utilizado
    #[serde(default)]
    pub equipo_cbr: Option<String>,
    #[serde(default)]
    pub equipo_dial_deformacion: Option<String>,
    #[serde(default)]
    pub equipo_dial_expansion: Option<String>,
    #[serde(default)]
    pub equipo_horno_110: Option<String>,
    #[serde(default)]
    pub equipo_pison: Option<String>,
    #[serde(default)]
    pub equipo_balanza_1g: Option<String>,
    #[serde(default)]
    pub equipo_balanza_01g: Option<String>,

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

impl CbrRecord {
    /// Fresh record the way the form opens: the three specimens prefilled
    /// with the standard blow counts and full-length reading tables.
    pub fn new() -> Self {
        Self {
            golpes_por_especimen: [Some(56.0), Some(25.0), Some(10.0)],
            lecturas_penetracion: vec![LecturaPenetracion::default(); 12],
            hinchamiento: vec![FilaHinchamiento::default(); 6],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_addressing() {
        assert_eq!(Saturacion::SinSaturar.columna(Especimen::Uno), 0);
        assert_eq!(Saturacion::Saturado.columna(Especimen::Uno), 1);
        assert_eq!(Saturacion::SinSaturar.columna(Especimen::Dos), 2);
        assert_eq!(Saturacion::Saturado.columna(Especimen::Tres), 5);
    }

    #[test]
    fn test_specimen_labels() {
        let etiquetas: Vec<String> = Especimen::TODOS.iter().map(|e| e.etiqueta()).collect();
        assert_eq!(etiquetas, vec!["Esp.01", "Esp.02", "Esp.03"]);
    }

    #[test]
    fn test_new_prefills_blow_counts() {
        let record = CbrRecord::new();
        assert_eq!(
            record.golpes_por_especimen,
            [Some(56.0), Some(25.0), Some(10.0)]
        );
        assert_eq!(record.lecturas_penetracion.len(), 12);
        assert_eq!(record.hinchamiento.len(), 6);
    }

    #[test]
    fn test_missing_arrays_default_on_deserialize() {
        let record: CbrRecord = serde_json::from_str(
            r#"{"muestra":"12-SU-25","numero_ot":"45-25","realizado_por":"J. QUISPE"}"#,
        )
        .unwrap();
        assert_eq!(record.masa_tara_g_por_columna, [None; COLUMNAS]);
        assert!(record.lecturas_penetracion.is_empty());
    }
}
