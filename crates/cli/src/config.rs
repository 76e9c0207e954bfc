// crates/cli/src/config.rs
use crate::args::Args;
use line_count_core::RunConfig;

impl From<&Args> for RunConfig {
    fn from(args: &Args) -> Self {
        // An empty or blank label falls back to the platform default, the
        // same as not passing -e at all.
        let encoding = args
            .encoding
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string);

        Self {
            encoding,
            style: args.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::args::Args;
    use clap::Parser;
    use line_count_core::RunConfig;

    #[test]
    fn blank_encoding_means_platform_default() {
        let args = Args::try_parse_from(["line_count", "-e", "  ", "a.txt"]).unwrap();
        let config = RunConfig::from(&args);
        assert_eq!(config.encoding, None);
    }

    #[test]
    fn encoding_label_is_trimmed() {
        let args = Args::try_parse_from(["line_count", "-e", " utf-8 ", "a.txt"]).unwrap();
        let config = RunConfig::from(&args);
        assert_eq!(config.encoding.as_deref(), Some("utf-8"));
    }
}
