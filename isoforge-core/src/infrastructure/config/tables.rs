// isoforge-core/src/infrastructure/config/tables.rs
//
// Satellite files under the first `config-paths` folder. Each one replaces
// the built-in table it names; a missing file keeps the built-in.
// A table that fails validation stops the run before any source is read.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::project::ProjectConfig;
use crate::domain::tables::{
    ContinentOverrides, CountryCurrencies, ReferenceTables, RenameEntry, RenameTable,
    TypeAliasTable,
};
use crate::error::IsoforgeError;
use crate::infrastructure::config::project::load_fragment;

#[derive(Deserialize)]
struct RenamesWrapper {
    renames: Vec<RenameEntry>,
}

#[derive(Deserialize)]
struct TypeAliasesWrapper {
    type_aliases: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct ContinentsWrapper {
    continent_overrides: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct CurrenciesWrapper {
    country_currencies: BTreeMap<String, String>,
}

#[instrument(skip(project_dir, config))]
pub fn load_reference_tables(
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<ReferenceTables, IsoforgeError> {
    let mut tables = ReferenceTables::default();

    let Some(config_folder) = config.config_paths.first() else {
        return Ok(tables);
    };
    let config_dir = project_dir.join(config_folder);
    if !config_dir.exists() {
        return Ok(tables);
    }

    let renames_path = config_dir.join("renames.yml");
    if renames_path.exists() {
        let wrapper: RenamesWrapper = load_fragment(&renames_path)?;
        tables.renames = RenameTable::new(wrapper.renames)?;
        info!("  🔁 {} code renames loaded", tables.renames.len());
    }

    let aliases_path = config_dir.join("type_aliases.yml");
    if aliases_path.exists() {
        let wrapper: TypeAliasesWrapper = load_fragment(&aliases_path)?;
        tables.type_aliases = TypeAliasTable::new(wrapper.type_aliases)?;
        info!("  🏷️  {} type aliases loaded", tables.type_aliases.len());
    }

    let continents_path = config_dir.join("continents.yml");
    if continents_path.exists() {
        let wrapper: ContinentsWrapper = load_fragment(&continents_path)?;
        tables.continent_overrides = ContinentOverrides::new(wrapper.continent_overrides);
        info!(
            "  🌍 {} continent overrides loaded",
            tables.continent_overrides.len()
        );
    }

    let currencies_path = config_dir.join("currencies.yml");
    if currencies_path.exists() {
        let wrapper: CurrenciesWrapper = load_fragment(&currencies_path)?;
        tables.country_currencies = CountryCurrencies::new(wrapper.country_currencies);
        info!(
            "  💱 {} country currencies loaded",
            tables.country_currencies.len()
        );
    }

    Ok(tables)
}
