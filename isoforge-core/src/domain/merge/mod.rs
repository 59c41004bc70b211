// isoforge-core/src/domain/merge/mod.rs
//
// Source Merger: the standards body is authoritative for naming and detail,
// the gazetteer for existence and continent. Nothing here mutates a fetched
// record; every merged record is built fresh.

pub mod countries;
pub mod currencies;
pub mod subdivisions;

pub use countries::CountryMerger;
pub use currencies::select_currencies;
pub use subdivisions::{SubdivisionNormalizer, collapse_language_variants, union_subdivisions};
