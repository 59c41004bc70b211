// isoforge-core/src/infrastructure/adapters/snapshot.rs

// Reads what a fetcher saved to disk. One directory per source:
//
//   <dir>/countries.yaml
//   <dir>/currencies.yaml
//   <dir>/subdivisions/<CC>.yaml     (any depth, file stem = country code)
//
// Live scraping is out of scope; this is the only ReferenceSource shipped.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::domain::project::SourceConfig;
use crate::domain::reference::{Country, Currency, RawCountry, RawSubdivision};
use crate::error::IsoforgeError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::ReferenceSource;

const COUNTRIES_FILE: &str = "countries.yaml";
const CURRENCIES_FILE: &str = "currencies.yaml";
const SUBDIVISIONS_DIR: &str = "subdivisions";

#[derive(Deserialize)]
struct CountriesFile {
    #[serde(default)]
    countries: Vec<RawCountry>,
}

#[derive(Deserialize)]
struct SubdivisionsFile {
    #[serde(default)]
    subdivisions: Vec<RawSubdivision>,
}

#[derive(Deserialize)]
struct CurrenciesFile {
    #[serde(default)]
    currencies: Vec<Currency>,
}

#[derive(Debug)]
pub struct SnapshotSource {
    name: String,
    root: PathBuf,
    /// Country code (upper-case) → subdivision file.
    subdivision_files: HashMap<String, PathBuf>,
}

impl SnapshotSource {
    #[instrument(skip_all)]
    pub fn open(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let root = root.into();
        let subdivision_files = index_subdivisions(&root.join(SUBDIVISIONS_DIR));
        debug!(
            source = %name,
            files = subdivision_files.len(),
            "Indexed subdivision snapshots"
        );

        Self {
            name,
            root,
            subdivision_files,
        }
    }

    /// `path` in the configuration is relative to the project directory.
    pub fn from_config(project_dir: &Path, config: &SourceConfig) -> Self {
        Self::open(config.name.clone(), project_dir.join(&config.path))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read<T: DeserializeOwned>(&self, path: &Path, item: &str) -> Result<T, IsoforgeError> {
        if !path.is_file() {
            return Err(InfrastructureError::SnapshotMissing {
                source_name: self.name.clone(),
                item: item.to_string(),
            }
            .into());
        }
        let content = fs::read_to_string(path)?;
        let parsed = serde_yaml::from_str(&content).map_err(InfrastructureError::YamlError)?;
        Ok(parsed)
    }
}

fn index_subdivisions(dir: &Path) -> HashMap<String, PathBuf> {
    let mut files = HashMap::new();
    if !dir.exists() {
        return files;
    }

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            files.insert(stem.to_uppercase(), path.to_path_buf());
        }
    }
    files
}

impl ReferenceSource for SnapshotSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn countries(&self) -> Result<Vec<RawCountry>, IsoforgeError> {
        let file: CountriesFile = self.read(&self.root.join(COUNTRIES_FILE), "countries")?;
        Ok(file.countries)
    }

    fn subdivisions(&self, country: &Country) -> Result<Vec<RawSubdivision>, IsoforgeError> {
        let item = format!("subdivisions of {}", country.code);
        match self.subdivision_files.get(&country.code.to_uppercase()) {
            Some(path) => {
                let file: SubdivisionsFile = self.read(path, &item)?;
                Ok(file.subdivisions)
            }
            None => Err(InfrastructureError::SnapshotMissing {
                source_name: self.name.clone(),
                item,
            }
            .into()),
        }
    }

    fn currencies(&self) -> Result<Vec<Currency>, IsoforgeError> {
        let file: CurrenciesFile = self.read(&self.root.join(CURRENCIES_FILE), "currencies")?;
        Ok(file.currencies)
    }
}
