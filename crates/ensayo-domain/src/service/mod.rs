//! Pure domain services: input normalization and derived-value computation
//!
//! Every function here is synchronous and side-effect free, and none of
//! them can fail: unparseable text passes through for the technician to
//! correct, and a formula whose inputs are missing yields `None`.

pub mod cbr_humedad;
pub mod codigo;
pub mod fecha;
pub mod humedad;
pub mod muestra_minima;
pub mod restricted;

pub use cbr_humedad::{resumen_humedad, Estado, FilaResumen, ResumenHumedad, TOLERANCIA_HUMEDAD};
pub use codigo::{normalize_muestra_code, normalize_numero_ot_code};
pub use fecha::{current_year_short, format_short_date, normalize_flexible_date};
pub use humedad::{aplicar_derivados, derive_humedad, round2, HumedadDerivado};
pub use muestra_minima::{cumple_masa_minima, masa_minima};
pub use restricted::{normalize_codigos, normalize_golpes};
