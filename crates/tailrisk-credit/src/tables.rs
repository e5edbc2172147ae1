//! Exposure, rating and PD reference tables.
//!
//! All three tables are built once per analysis and read-only afterwards.
//! They are backed by `BTreeMap` so iteration order is the sorted obligor
//! order; combined with an injected, seeded generator this makes credit
//! simulations exactly reproducible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CreditError, CreditResult};

/// Obligor → positive monetary exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureTable(BTreeMap<String, f64>);

impl ExposureTable {
    /// Builds an exposure table, validating every amount.
    ///
    /// # Errors
    ///
    /// Fails with [`CreditError::InvalidInput`] on a non-positive or
    /// non-finite exposure.
    pub fn new<K, I>(entries: I) -> CreditResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut table = BTreeMap::new();
        for (obligor, exposure) in entries {
            let obligor = obligor.into();
            if !exposure.is_finite() || exposure <= 0.0 {
                return Err(CreditError::invalid_input(format!(
                    "exposure for obligor '{obligor}' must be a positive amount, got {exposure}"
                )));
            }
            table.insert(obligor, exposure);
        }
        Ok(Self(table))
    }

    /// Number of obligors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no obligors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates obligors in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Obligor → categorical rating label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTable(BTreeMap<String, String>);

impl RatingTable {
    /// Builds a rating table from obligor/label pairs.
    pub fn new<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Looks up the rating label for an obligor.
    pub fn get(&self, obligor: &str) -> Option<&str> {
        self.0.get(obligor).map(String::as_str)
    }
}

/// Rating label → 1-year probability of default.
///
/// Static reference data; read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdTable(BTreeMap<String, f64>);

impl PdTable {
    /// Builds a PD table, validating every probability.
    ///
    /// # Errors
    ///
    /// Fails with [`CreditError::InvalidInput`] when a PD lies outside the
    /// open interval (0, 1).
    pub fn new<K, I>(entries: I) -> CreditResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut table = BTreeMap::new();
        for (rating, pd) in entries {
            let rating = rating.into();
            if !pd.is_finite() || pd <= 0.0 || pd >= 1.0 {
                return Err(CreditError::invalid_input(format!(
                    "PD for rating '{rating}' must be in (0, 1), got {pd}"
                )));
            }
            table.insert(rating, pd);
        }
        Ok(Self(table))
    }

    /// The built-in 1-year PD reference table by rating bucket.
    pub fn standard() -> Self {
        Self::new([
            ("AAA", 0.0005),
            ("AA", 0.001),
            ("A", 0.002),
            ("BBB", 0.01),
            ("BB", 0.03),
            ("B", 0.06),
            ("CCC", 0.15),
        ])
        .expect("reference PDs are all in (0, 1)")
    }

    /// Looks up the PD for a rating label.
    pub fn get(&self, rating: &str) -> Option<f64> {
        self.0.get(rating).copied()
    }
}

/// One obligor with its exposure and resolved default probability.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedObligor {
    pub name: String,
    pub exposure: f64,
    pub pd: f64,
}

/// Joins the three tables, enforcing referential integrity.
///
/// Every obligor in the exposure table must have a rating, and every
/// rating must resolve in the PD table; otherwise the specific typed
/// failure is raised and nothing is computed. Output order is the sorted
/// obligor order.
pub(crate) fn resolve_obligors(
    exposures: &ExposureTable,
    ratings: &RatingTable,
    pd_table: &PdTable,
) -> CreditResult<Vec<ResolvedObligor>> {
    let mut resolved = Vec::with_capacity(exposures.len());
    for (obligor, exposure) in exposures.iter() {
        let rating = ratings.get(obligor).ok_or_else(|| CreditError::MissingRating {
            obligor: obligor.to_string(),
        })?;
        let pd = pd_table.get(rating).ok_or_else(|| CreditError::UnknownRating {
            obligor: obligor.to_string(),
            rating: rating.to_string(),
        })?;
        resolved.push(ResolvedObligor {
            name: obligor.to_string(),
            exposure,
            pd,
        });
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exposure_table_rejects_non_positive() {
        assert!(ExposureTable::new([("Bond_A", 0.0)]).is_err());
        assert!(ExposureTable::new([("Bond_A", -100.0)]).is_err());
        assert!(ExposureTable::new([("Bond_A", f64::NAN)]).is_err());
        assert!(ExposureTable::new([("Bond_A", 100.0)]).is_ok());
    }

    #[test]
    fn test_pd_table_rejects_out_of_range() {
        assert!(PdTable::new([("AAA", 0.0)]).is_err());
        assert!(PdTable::new([("AAA", 1.0)]).is_err());
        assert!(PdTable::new([("AAA", 0.5)]).is_ok());
    }

    #[test]
    fn test_standard_pd_table() {
        let table = PdTable::standard();
        assert_relative_eq!(table.get("BBB").unwrap(), 0.01);
        assert_relative_eq!(table.get("CCC").unwrap(), 0.15);
        assert!(table.get("D").is_none());
    }

    #[test]
    fn test_resolve_sorted_order() {
        let exposures =
            ExposureTable::new([("B2", 500.0), ("A1", 1000.0), ("C3", 250.0)]).unwrap();
        let ratings = RatingTable::new([("A1", "BBB"), ("B2", "BB"), ("C3", "B")]);

        let resolved = resolve_obligors(&exposures, &ratings, &PdTable::standard()).unwrap();
        let names: Vec<&str> = resolved.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["A1", "B2", "C3"]);
        assert_relative_eq!(resolved[0].pd, 0.01);
    }

    #[test]
    fn test_missing_rating_detected() {
        let exposures = ExposureTable::new([("Bond_A", 1000.0)]).unwrap();
        let ratings = RatingTable::new(Vec::<(&str, &str)>::new());

        let err = resolve_obligors(&exposures, &ratings, &PdTable::standard()).unwrap_err();
        assert_eq!(
            err,
            CreditError::MissingRating {
                obligor: "Bond_A".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_rating_detected() {
        let exposures = ExposureTable::new([("Bond_A", 1000.0)]).unwrap();
        let ratings = RatingTable::new([("Bond_A", "SUPER")]);

        let err = resolve_obligors(&exposures, &ratings, &PdTable::standard()).unwrap_err();
        assert_eq!(
            err,
            CreditError::UnknownRating {
                obligor: "Bond_A".to_string(),
                rating: "SUPER".to_string()
            }
        );
    }
}
