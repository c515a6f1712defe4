//! Country data as returned by the REST Countries v3.1 API.
//!
//! Field names follow the API's JSON so responses deserialize directly.
//! Collection fields default to empty because the API omits them for some
//! territories (Antarctica has no capital, islands have no borders).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Common and official names of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    /// Everyday name, e.g. "Germany"
    pub common: String,
    /// Official name, e.g. "Federal Republic of Germany"
    pub official: String,
}

/// Flag image references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// PNG image URL
    #[serde(default)]
    pub png: String,
    /// SVG image URL
    #[serde(default)]
    pub svg: String,
    /// Textual description of the flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Country summary used by the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Names
    pub name: CountryName,
    /// Population count
    #[serde(default)]
    pub population: u64,
    /// Region label, e.g. "Europe"
    #[serde(default)]
    pub region: String,
    /// Capitals in API order (may be empty)
    #[serde(default)]
    pub capital: Vec<String>,
    /// Flag images
    #[serde(default)]
    pub flags: Flags,
    /// ISO 3166-1 alpha-3 code
    pub cca3: String,
}

/// A native-language name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    /// Common native name
    pub common: String,
    /// Official native name
    pub official: String,
}

/// Names of a country including its native-language names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailName {
    /// Everyday name
    pub common: String,
    /// Official name
    pub official: String,
    /// Native names keyed by ISO 639-3 language code
    #[serde(rename = "nativeName", default)]
    pub native_name: BTreeMap<String, NativeName>,
}

/// A currency in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency name, e.g. "Euro"
    pub name: String,
    /// Currency symbol, e.g. "€"
    #[serde(default)]
    pub symbol: String,
}

/// Full country record used by the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetail {
    /// Names including native names
    pub name: DetailName,
    /// Population count
    #[serde(default)]
    pub population: u64,
    /// Region label
    #[serde(default)]
    pub region: String,
    /// Subregion label, e.g. "Western Europe"
    #[serde(default)]
    pub subregion: String,
    /// Capitals in API order
    #[serde(default)]
    pub capital: Vec<String>,
    /// Flag images
    #[serde(default)]
    pub flags: Flags,
    /// Currencies keyed by ISO 4217 code
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    /// Languages keyed by ISO 639-3 code
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Bordering countries as alpha-3 codes
    #[serde(default)]
    pub borders: Vec<String>,
    /// Top-level domains
    #[serde(default)]
    pub tld: Vec<String>,
    /// ISO 3166-1 alpha-3 code
    pub cca3: String,
}

impl CountryDetail {
    /// Summary view of this country.
    #[must_use]
    pub fn summary(&self) -> Country {
        Country {
            name: CountryName {
                common: self.name.common.clone(),
                official: self.name.official.clone(),
            },
            population: self.population,
            region: self.region.clone(),
            capital: self.capital.clone(),
            flags: self.flags.clone(),
            cca3: self.cca3.clone(),
        }
    }
}

/// Access to the fields the search pipeline reads.
///
/// Implemented for owned records and for references, so a borrowed
/// collection can run through the pipeline without cloning.
pub trait Searchable: Sync {
    /// Everyday name
    fn common_name(&self) -> &str;
    /// Official name
    fn official_name(&self) -> &str;
    /// Region label
    fn region(&self) -> &str;
    /// Population count
    fn population(&self) -> u64;
}

impl Searchable for Country {
    fn common_name(&self) -> &str {
        &self.name.common
    }

    fn official_name(&self) -> &str {
        &self.name.official
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn population(&self) -> u64 {
        self.population
    }
}

impl Searchable for CountryDetail {
    fn common_name(&self) -> &str {
        &self.name.common
    }

    fn official_name(&self) -> &str {
        &self.name.official
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn population(&self) -> u64 {
        self.population
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn common_name(&self) -> &str {
        (**self).common_name()
    }

    fn official_name(&self) -> &str {
        (**self).official_name()
    }

    fn region(&self) -> &str {
        (**self).region()
    }

    fn population(&self) -> u64 {
        (**self).population()
    }
}
