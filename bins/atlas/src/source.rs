//! Where country data comes from: the REST Countries API or a local file

use atlas_api_client::{ClientConfig, CountriesClient};
use atlas_core::config::Config;
use atlas_core::{Error, Result, ResultExt};
use atlas_search::{Country, CountryDetail};
use std::path::{Path, PathBuf};

/// Country data source
pub enum Source {
    /// Live API
    Api(CountriesClient),
    /// Offline JSON array of country objects
    File {
        path: PathBuf,
        countries: Vec<CountryDetail>,
    },
}

impl Source {
    /// Read `input` if given, otherwise connect to the configured API
    pub fn open(input: Option<&Path>, config: &Config) -> Result<Self> {
        match input {
            Some(path) => Self::from_file(path),
            None => {
                let client_config =
                    ClientConfig::from_settings(&config.schema.api).with_env_overrides();
                let client = CountriesClient::with_config(client_config).map_err(Error::from)?;
                tracing::debug!(base_url = %client.base_url(), "Using REST Countries API");
                Ok(Self::Api(client))
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(Error::from)
            .context(format!("Reading {}", path.display()))?;
        let countries: Vec<CountryDetail> = serde_json::from_str(&content)
            .map_err(Error::from)
            .context(format!("Parsing {}", path.display()))
            .with_suggestion("The file must hold a JSON array of REST Countries objects")?;

        tracing::debug!(path = %path.display(), count = countries.len(), "Loaded countries from file");
        Ok(Self::File {
            path: path.to_path_buf(),
            countries,
        })
    }

    /// Whether reads go over the network
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Every country, list-view fields only
    pub async fn all(&self) -> Result<Vec<Country>> {
        match self {
            Self::Api(client) => Ok(client.countries().all().await?),
            Self::File { countries, .. } => Ok(countries.iter().map(CountryDetail::summary).collect()),
        }
    }

    /// Exact (case-insensitive) lookup by common or official name
    pub async fn by_name(&self, name: &str) -> Result<Option<CountryDetail>> {
        match self {
            Self::Api(client) => Ok(client.countries().by_name(name).await?),
            Self::File { countries, path } => {
                let wanted = name.trim().to_lowercase();
                let found = countries
                    .iter()
                    .find(|c| {
                        c.name.common.to_lowercase() == wanted
                            || c.name.official.to_lowercase() == wanted
                    })
                    .cloned();
                tracing::debug!(path = %path.display(), query = name, found = found.is_some(), "File lookup");
                Ok(found)
            }
        }
    }

    /// Resolve alpha-3 codes, keeping the order of `codes`
    pub async fn by_codes(&self, codes: &[String]) -> Result<Vec<Country>> {
        match self {
            Self::Api(client) => Ok(client.countries().by_codes(codes).await?),
            Self::File { countries, .. } => Ok(codes
                .iter()
                .filter_map(|code| {
                    countries
                        .iter()
                        .find(|c| c.cca3.eq_ignore_ascii_case(code))
                        .map(CountryDetail::summary)
                })
                .collect()),
        }
    }
}
