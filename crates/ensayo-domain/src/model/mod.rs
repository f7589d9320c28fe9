//! Domain model types

pub mod cbr;
pub mod humedad;

pub use cbr::{CbrRecord, Especimen, FilaHinchamiento, LecturaPenetracion, Saturacion};
pub use humedad::{Condicion, HumedadRecord, MetodoFila};
