use std::env;

use anyhow::{Result, bail};

/// Environment variable selecting the default output format.
pub(crate) const FORMAT_ENV: &str = "COLORCODE_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unsupported output format: {other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Pair(String),
    Number { major: String, minor: String },
    Manual,
    Help,
}

/// Fully resolved invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CliConfig {
    pub(crate) command: Command,
    pub(crate) format: OutputFormat,
}

impl CliConfig {
    pub(crate) fn from_env() -> Result<Self> {
        let env_format = env::var(FORMAT_ENV).ok();
        Self::parse(env::args().skip(1), env_format.as_deref())
    }

    /// `--json` on the command line wins over the environment.
    pub(crate) fn parse<I>(args: I, env_format: Option<&str>) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut json_flag = false;
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--json" => json_flag = true,
                "-h" | "--help" => {
                    return Ok(Self {
                        command: Command::Help,
                        format: OutputFormat::Text,
                    });
                },
                flag if flag.starts_with("--") => {
                    bail!("unknown option: {flag}")
                },
                _ => positional.push(arg),
            }
        }

        let format = match (json_flag, env_format) {
            (true, _) => OutputFormat::Json,
            (false, Some(raw)) => OutputFormat::parse(raw)?,
            (false, None) => OutputFormat::default(),
        };

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            Some("pair") => {
                let Some(number) = positional.next() else {
                    bail!("usage: colorcode pair <number>");
                };
                Command::Pair(number)
            },
            Some("number") => {
                let (Some(major), Some(minor)) =
                    (positional.next(), positional.next())
                else {
                    bail!("usage: colorcode number <major> <minor>");
                };
                Command::Number { major, minor }
            },
            Some("manual") => Command::Manual,
            None => Command::Help,
            Some(other) => bail!("unknown command: {other}"),
        };

        if let Some(extra) = positional.next() {
            bail!("unexpected argument: {extra}");
        }

        Ok(Self { command, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn given_pair_command_when_parsing_then_text_by_default() {
        let config = CliConfig::parse(args(&["pair", "14"]), None)
            .expect("valid arguments");
        assert_eq!(config.command, Command::Pair("14".to_string()));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn given_json_flag_when_env_says_text_then_flag_wins() {
        let config = CliConfig::parse(
            args(&["number", "Red", "Blue", "--json"]),
            Some("text"),
        )
        .expect("valid arguments");
        assert_eq!(
            config.command,
            Command::Number {
                major: "Red".to_string(),
                minor: "Blue".to_string(),
            }
        );
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn given_env_format_when_parsing_then_env_is_used() {
        let config = CliConfig::parse(args(&["manual"]), Some("JSON"))
            .expect("valid arguments");
        assert_eq!(config.format, OutputFormat::Json);
        assert!(CliConfig::parse(args(&["manual"]), Some("yaml")).is_err());
    }

    #[test]
    fn given_malformed_arguments_when_parsing_then_error() {
        assert!(CliConfig::parse(args(&["pair"]), None).is_err());
        assert!(CliConfig::parse(args(&["number", "Red"]), None).is_err());
        assert!(CliConfig::parse(args(&["paint"]), None).is_err());
        assert!(CliConfig::parse(args(&["manual", "extra"]), None).is_err());
        assert!(CliConfig::parse(args(&["--verbose"]), None).is_err());
    }

    #[test]
    fn given_no_arguments_when_parsing_then_help() {
        let config = CliConfig::parse(Vec::new(), None).expect("help");
        assert_eq!(config.command, Command::Help);
    }
}
