#[cfg(test)]
#[path = "poke_api_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CatalogClient;
use crate::domain::models::CatalogEntry;
use crate::domain::models::EntryDetail;
use crate::domain::models::Stat;

#[derive(Deserialize)]
struct PokemonListResponse {
    results: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Deserialize)]
struct PokemonType {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Deserialize)]
struct PokemonAbility {
    ability: NamedResource,
}

#[derive(Deserialize)]
struct PokemonStat {
    stat: NamedResource,
    base_stat: i64,
}

#[derive(Deserialize)]
struct PokemonResponse {
    id: i64,
    name: String,
    height: i64,
    weight: i64,
    // Some forms come back with a null base experience.
    base_experience: Option<i64>,
    types: Vec<PokemonType>,
    abilities: Vec<PokemonAbility>,
    stats: Vec<PokemonStat>,
}

impl From<PokemonResponse> for EntryDetail {
    fn from(res: PokemonResponse) -> EntryDetail {
        return EntryDetail {
            id: res.id,
            name: res.name,
            height: res.height,
            weight: res.weight,
            base_experience: res.base_experience.unwrap_or_default(),
            types: res.types.into_iter().map(|t| return t.kind.name).collect(),
            abilities: res
                .abilities
                .into_iter()
                .map(|a| return a.ability.name)
                .collect(),
            stats: res
                .stats
                .into_iter()
                .map(|s| {
                    return Stat {
                        name: s.stat.name,
                        value: s.base_stat,
                    };
                })
                .collect(),
        };
    }
}

/// HTTP client for the PokeAPI REST endpoint.
pub struct PokeApi {
    url: String,
    catalog_limit: String,
    client: reqwest::Client,
}

impl Default for PokeApi {
    fn default() -> PokeApi {
        return PokeApi::new(
            &Config::get(ConfigKey::ApiUrl),
            &Config::get(ConfigKey::CatalogLimit),
        );
    }
}

impl PokeApi {
    pub fn new(url: &str, catalog_limit: &str) -> PokeApi {
        return PokeApi {
            url: url.trim_end_matches('/').to_string(),
            catalog_limit: catalog_limit.to_string(),
            client: reqwest::Client::new(),
        };
    }

    async fn get_json<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        let res = req.send().await;
        if let Err(err) = res.as_ref() {
            tracing::error!(error = ?err, "PokeAPI is not reachable");
        }

        let response = res?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), url = %response.url(), "PokeAPI request failed");
            bail!("status code {}", status.as_u16());
        }

        return Ok(response.json::<T>().await?);
    }
}

#[async_trait]
impl CatalogClient for PokeApi {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        let list_url = format!("{}/pokemon", self.url);
        tracing::debug!(url = %list_url, limit = %self.catalog_limit, "fetching catalog");

        let req = self
            .client
            .get(&list_url)
            .query(&[("limit", &self.catalog_limit)]);
        let body = self.get_json::<PokemonListResponse>(req).await?;

        return Ok(body.results);
    }

    async fn fetch_detail(&self, url: &str) -> Result<EntryDetail> {
        tracing::debug!(url = url, "fetching details");

        let body = self.get_json::<PokemonResponse>(self.client.get(url)).await?;

        return Ok(body.into());
    }
}
