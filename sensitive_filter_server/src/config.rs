use anyhow::{Context, Result};
use clap::Parser;
use sensitive_filter::{Engine, LineFlags, MAX_INPUT_CHARS};
use std::path::PathBuf;

/// Serve a sensitive-word filter over HTTP.
#[derive(Debug, Parser)]
#[command(name = "sensitive-filter-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to bind to
    #[arg(long, env = "FILTER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "FILTER_PORT", default_value_t = 18000)]
    pub port: u16,

    /// Sensitive word list, one word per line
    #[arg(long, env = "FILTER_SENSITIVE_WORDS", default_value = "sensitive_words.txt")]
    pub sensitive_words: PathBuf,

    /// Whitelist, one phrase per line
    #[arg(long, env = "FILTER_WHITELIST", default_value = "white.txt")]
    pub whitelist: PathBuf,

    /// Maximum accepted text length, in characters
    #[arg(long, env = "FILTER_MAX_CHARS", default_value_t = MAX_INPUT_CHARS)]
    pub max_chars: usize,

    /// Trim surrounding whitespace from every word-list line
    #[arg(long, env = "FILTER_TRIM_WHITESPACE")]
    pub trim_whitespace: bool,
}

impl Config {
    pub fn line_flags(&self) -> LineFlags {
        let mut flags = LineFlags::default();
        flags.set(LineFlags::TRIM_WHITESPACE, self.trim_whitespace);
        flags
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load both word lists into an engine.
    pub fn load_engine(&self) -> Result<Engine> {
        Engine::load(&self.sensitive_words, &self.whitelist, self.line_flags())
            .context("failed to load word lists")
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use clap::Parser;
    use sensitive_filter::LineFlags;
    use std::path::Path;

    #[test]
    fn explicit_arguments() {
        let config = Config::try_parse_from([
            "sensitive-filter-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--sensitive-words",
            "words.txt",
            "--whitelist",
            "allowed.txt",
            "--max-chars",
            "100",
            "--trim-whitespace",
        ])
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.sensitive_words, Path::new("words.txt"));
        assert_eq!(config.whitelist, Path::new("allowed.txt"));
        assert_eq!(config.max_chars, 100);
        assert_eq!(
            config.line_flags(),
            LineFlags::STRIP_BOM | LineFlags::TRIM_WHITESPACE
        );
    }

    #[test]
    fn load_engine_missing_file() {
        let config = Config::try_parse_from([
            "sensitive-filter-server",
            "--sensitive-words",
            "missing/sensitive_words.txt",
        ])
        .unwrap();

        let error = config.load_engine().unwrap_err();

        assert_eq!(error.to_string(), "failed to load word lists");
        assert_eq!(error.chain().count(), 3);
        assert!(error.chain().nth(1).unwrap().to_string().contains("sensitive_words.txt"));
    }

    #[test]
    fn invalid_port() {
        assert!(Config::try_parse_from(["sensitive-filter-server", "--port", "http"]).is_err());
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;

        Config::command().debug_assert();
    }
}
