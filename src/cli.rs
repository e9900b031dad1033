//! Command-line surface
//!
//! Flags follow the single-dash long form (`-db`, `-bucket`, `-limit`).
//! clap only understands `--name`, so [`normalize_args`] rewrites the
//! single-dash spellings before parsing. `-db x`, `-db=x`, `--db x` and
//! `--db=x` are all accepted.

use std::ffi::OsString;

use clap::Parser;

use crate::config::{Config, OpenMode};
use crate::listing::Encoding;

/// Long flags that may be written with a single dash
const LONG_FLAGS: &[&str] = &[
    "db", "bucket", "limit", "encoding", "read-only", "verbose", "help", "version",
];

/// boltview CLI
#[derive(Parser, Debug)]
#[command(name = "boltview")]
#[command(about = "Inspect a bbolt key-value store file")]
#[command(version)]
pub struct Args {
    /// Path to boltdb file
    #[arg(long = "db", default_value = "")]
    pub db: String,

    /// Name of bucket to view (empty lists all buckets)
    #[arg(long, default_value = "")]
    pub bucket: String,

    /// Number of latest rows (by key order) to display; 0 or negative shows all
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub limit: i64,

    /// Rendering of keys, values and bucket names
    #[arg(long, value_enum, default_value_t = Encoding::Text)]
    pub encoding: Encoding,

    /// Open the file with a shared read-only lock
    #[arg(long = "read-only")]
    pub read_only: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    /// Parse from an argv-style iterator (first item is the program name)
    pub fn parse_go_style<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Like [`Args::parse_go_style`], returning the clap error instead of exiting
    pub fn try_parse_go_style<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    pub fn to_config(&self) -> Config {
        let open_mode = if self.read_only {
            OpenMode::ReadOnly
        } else {
            OpenMode::ReadWrite
        };

        Config::builder()
            .db_path(self.db.as_str())
            .bucket(self.bucket.as_str())
            .limit(self.limit)
            .open_mode(open_mode)
            .encoding(self.encoding)
            .build()
    }
}

/// Rewrite `-name` / `-name=value` to `--name` / `--name=value` for known flags.
///
/// Arguments after a bare `--` are left alone, as are values that merely
/// start with a dash (e.g. `-3`).
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if s.starts_with('-') && !s.starts_with("--") => {
                let name = s[1..].split('=').next().unwrap_or_default();
                if LONG_FLAGS.contains(&name) {
                    Some(OsString::from(format!("-{}", s)))
                } else {
                    None
                }
            }
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_go_style(std::iter::once("boltview").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_normalize_single_dash_flags() {
        let out = normalize_args(["boltview", "-db", "x.db", "-bucket=logs", "-limit", "-3"]);
        let out: Vec<_> = out.iter().map(|s| s.to_str().unwrap()).collect();
        assert_eq!(
            out,
            vec!["boltview", "--db", "x.db", "--bucket=logs", "--limit", "-3"]
        );
    }

    #[test]
    fn test_normalize_leaves_unknown_and_passthrough() {
        let out = normalize_args(["boltview", "-x", "--db", "a", "--", "-db"]);
        let out: Vec<_> = out.iter().map(|s| s.to_str().unwrap()).collect();
        assert_eq!(out, vec!["boltview", "-x", "--db", "a", "--", "-db"]);
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&[]);
        assert_eq!(args.db, "");
        assert_eq!(args.bucket, "");
        assert_eq!(args.limit, 0);
        assert_eq!(args.encoding, Encoding::Text);
        assert!(!args.read_only);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_go_style_flags() {
        let args = parse(&["-db", "app.db", "-bucket", "logs", "-limit", "2"]);
        assert_eq!(args.db, "app.db");
        assert_eq!(args.bucket, "logs");
        assert_eq!(args.limit, 2);
    }

    #[test]
    fn test_parse_equals_and_double_dash_forms() {
        let args = parse(&["--db=app.db", "-bucket=logs", "--limit=5", "-encoding", "hex"]);
        assert_eq!(args.db, "app.db");
        assert_eq!(args.bucket, "logs");
        assert_eq!(args.limit, 5);
        assert_eq!(args.encoding, Encoding::Hex);
    }

    #[test]
    fn test_parse_negative_limit() {
        let args = parse(&["-db", "app.db", "-limit", "-4"]);
        assert_eq!(args.limit, -4);
    }

    #[test]
    fn test_parse_rejects_non_integer_limit() {
        let result =
            Args::try_parse_go_style(["boltview", "-db", "app.db", "-limit", "many"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_config() {
        let args = parse(&["-db", "app.db", "-read-only"]);
        let config = args.to_config();
        assert_eq!(config.db_path, PathBuf::from("app.db"));
        assert_eq!(config.bucket, None);
        assert_eq!(config.open_mode, OpenMode::ReadOnly);

        let config = parse(&["-db", "app.db", "-bucket", "users"]).to_config();
        assert_eq!(config.bucket.as_deref(), Some("users"));
        assert_eq!(config.open_mode, OpenMode::ReadWrite);
    }
}
