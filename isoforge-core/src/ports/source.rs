// isoforge-core/src/ports/source.rs

// This file defines what the reconciliation core needs from a fetcher,
// without knowing how the data is obtained (scraper, headless browser, snapshot).
// Analogy: the socket in the wall. It fixes the shape, not the power plant.

use crate::domain::reference::{Country, Currency, RawCountry, RawSubdivision};
use crate::error::IsoforgeError;

/// A reference-data provider. Every call covers one item; a failure on one
/// item (a country's subdivisions, say) must not prevent the others.
/// Returned collections are unordered.
pub trait ReferenceSource {
    /// Short identifier used in logs and in the run report.
    fn name(&self) -> &str;

    fn countries(&self) -> Result<Vec<RawCountry>, IsoforgeError>;

    /// Subdivisions of one country. `country` is already merged, so a source
    /// can rely on its canonical code and name.
    fn subdivisions(&self, country: &Country) -> Result<Vec<RawSubdivision>, IsoforgeError>;

    fn currencies(&self) -> Result<Vec<Currency>, IsoforgeError>;
}
