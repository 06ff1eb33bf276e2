#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use clap::ArgMatches;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiUrl,
    CatalogLimit,
    LogFile,
    LogLevel,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::ApiUrl => "https://pokeapi.co/api/v2",
            ConfigKey::CatalogLimit => "10000",
            ConfigKey::LogFile => "poke-term.log",
            ConfigKey::LogLevel => "off",
        };

        return res.to_string();
    }

    pub fn load(clap_arg_matches: Vec<&ArgMatches>) {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }
    }
}
