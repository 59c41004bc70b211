// isoforge-core/src/domain/reference/mod.rs
//
// Reference records. Every entity exists twice: the `Raw*` shape a fetcher
// hands over (immutable), and the canonical shape the merge step builds.

pub mod country;
pub mod currency;
pub mod subdivision;

pub use country::{Country, RawCountry};
pub use currency::Currency;
pub use subdivision::{RawSubdivision, Subdivision};
