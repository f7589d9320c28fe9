//! Domain layer for laboratory soil-test forms
//!
//! Holds the test records (moisture content per ASTM D2216, CBR per
//! ASTM D1883), the static reference tables both forms consult, and the
//! pure services that normalize free-text input and derive the reported
//! quantities. Nothing in this crate performs I/O or returns an error:
//! a value is either computable or absent.

pub mod model;
pub mod reference;
pub mod service;
