//! Use cases over the domain records

mod form_service;

pub use form_service::{
    finalize_cbr, finalize_humedad, save_cbr, save_humedad, validar_cbr, validar_humedad,
};
