use clap::builder::PossibleValuesParser;
use clap::Arg;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn parse_catalog_limit(value: &str) -> Result<String, String> {
    match value.parse::<u32>() {
        Ok(limit) if limit > 0 => return Ok(limit.to_string()),
        _ => return Err(format!("'{value}' is not a positive integer")),
    }
}

fn arg(key: ConfigKey) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .num_args(1)
        .default_value(Config::default(key));
}

pub fn build() -> Command {
    return Command::new("poke-term")
        .about("Browse the PokeAPI catalog from your terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            arg(ConfigKey::ApiUrl)
                .value_name("URL")
                .help("Base URL of the PokeAPI REST endpoint"),
        )
        .arg(
            arg(ConfigKey::CatalogLimit)
                .value_name("COUNT")
                .value_parser(parse_catalog_limit)
                .help("Page size of the single catalog request"),
        )
        .arg(
            arg(ConfigKey::LogFile)
                .value_name("PATH")
                .help("File receiving the application logs"),
        )
        .arg(
            arg(ConfigKey::LogLevel)
                .value_parser(PossibleValuesParser::new([
                    "trace", "debug", "info", "warn", "error", "off",
                ]))
                .help("Minimum level written to the log file"),
        );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_runs_without_arguments() {
        let matches = build().try_get_matches_from(vec!["poke-term"]).unwrap();

        assert_eq!(
            matches.get_one::<String>("catalog-limit").unwrap(),
            "10000"
        );
    }

    #[test]
    fn it_rejects_a_zero_catalog_limit() {
        let res = build().try_get_matches_from(vec!["poke-term", "--catalog-limit", "0"]);

        assert!(res.is_err());
    }

    #[test]
    fn it_rejects_unknown_log_levels() {
        let res = build().try_get_matches_from(vec!["poke-term", "--log-level", "loud"]);

        assert!(res.is_err());
    }
}
