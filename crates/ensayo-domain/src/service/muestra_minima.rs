//! Minimum specimen mass lookup (ASTM D2216)

use crate::reference::TABLA_TM;

/// Minimum recommended specimen mass in grams for a nominal maximum
/// particle size. Exact label match; an unknown size is `None`, not an
/// error.
pub fn masa_minima(tamano: &str) -> Option<u32> {
    TABLA_TM.iter().find(|e| e.tm == tamano).map(|e| e.masa_g)
}

/// Whether an actual sample mass meets the minimum for the given size.
/// Undetermined when either the size is unknown or the mass is missing.
pub fn cumple_masa_minima(masa_muestra: Option<f64>, tamano: &str) -> Option<bool> {
    let minima = masa_minima(tamano)?;
    let masa = masa_muestra?;
    Some(masa >= f64::from(minima))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sizes() {
        assert_eq!(masa_minima("3/4"), Some(250));
        assert_eq!(masa_minima("N°4"), Some(100));
        assert_eq!(masa_minima("3"), Some(5000));
        assert_eq!(masa_minima("N°10"), Some(20));
    }

    #[test]
    fn test_unknown_size_is_none() {
        assert_eq!(masa_minima("7/8"), None);
        assert_eq!(masa_minima(""), None);
        // match is exact, not fuzzy
        assert_eq!(masa_minima("3/4 in"), None);
    }

    #[test]
    fn test_compliance_check() {
        assert_eq!(cumple_masa_minima(Some(300.0), "3/4"), Some(true));
        assert_eq!(cumple_masa_minima(Some(250.0), "3/4"), Some(true));
        assert_eq!(cumple_masa_minima(Some(249.9), "3/4"), Some(false));
    }

    #[test]
    fn test_compliance_undetermined_when_operand_missing() {
        assert_eq!(cumple_masa_minima(None, "3/4"), None);
        assert_eq!(cumple_masa_minima(Some(300.0), "7/8"), None);
    }
}
