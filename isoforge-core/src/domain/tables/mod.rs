// isoforge-core/src/domain/tables/mod.rs
//
// Static lookup tables. They are loaded and validated once, before any
// source is touched, then handed to the components that need them.

pub mod lookup;
pub mod rename;
pub mod type_alias;

pub use lookup::{ContinentOverrides, CountryCurrencies};
pub use rename::{RenameEntry, RenameTable};
pub use type_alias::TypeAliasTable;

/// Every static table of a run, bundled.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub renames: RenameTable,
    pub type_aliases: TypeAliasTable,
    pub continent_overrides: ContinentOverrides,
    pub country_currencies: CountryCurrencies,
}
