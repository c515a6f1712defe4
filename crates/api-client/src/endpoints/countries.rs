//! Country endpoints

use crate::client::CountriesClient;
use crate::error::{ApiError, ApiResult};
use atlas_search::{Country, CountryDetail};
use reqwest::Url;

/// Fields requested by the list view; keeps `/all` responses small
pub const LIST_FIELDS: &str = "name,population,region,capital,flags,cca3";

/// Country API interface
#[derive(Clone)]
pub struct CountriesApi {
    client: CountriesClient,
}

impl CountriesApi {
    /// Create a new countries API interface
    pub(crate) fn new(client: CountriesClient) -> Self {
        Self { client }
    }

    /// Fetch every country with the list-view fields
    pub async fn all(&self) -> ApiResult<Vec<Country>> {
        let url = self.all_url()?;
        self.client.get(url).await
    }

    /// Look up one country by its exact name.
    ///
    /// Returns `Ok(None)` when the API reports no match, either with a 404 or
    /// an empty array. When several countries match, the first one wins.
    pub async fn by_name(&self, name: &str) -> ApiResult<Option<CountryDetail>> {
        let url = self.by_name_url(name)?;
        match self.client.get::<Vec<CountryDetail>>(url).await {
            Ok(matches) => Ok(matches.into_iter().next()),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Resolve alpha-3 codes (e.g. border lists) to countries.
    ///
    /// An empty code list returns an empty vector without a request.
    pub async fn by_codes<S: AsRef<str>>(&self, codes: &[S]) -> ApiResult<Vec<Country>> {
        match self.by_codes_url(codes)? {
            Some(url) => self.client.get(url).await,
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn all_url(&self) -> ApiResult<Url> {
        let mut url = self.client.endpoint(&["all"])?;
        url.query_pairs_mut().append_pair("fields", LIST_FIELDS);
        Ok(url)
    }

    pub(crate) fn by_name_url(&self, name: &str) -> ApiResult<Url> {
        let mut url = self.client.endpoint(&["name", name])?;
        url.query_pairs_mut().append_pair("fullText", "true");
        Ok(url)
    }

    pub(crate) fn by_codes_url<S: AsRef<str>>(&self, codes: &[S]) -> ApiResult<Option<Url>> {
        if codes.is_empty() {
            return Ok(None);
        }

        let joined = codes.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        let mut url = self.client.endpoint(&["alpha"])?;
        url.query_pairs_mut().append_pair("codes", &joined);
        Ok(Some(url))
    }
}
