use std::path::{Path, PathBuf};

use casevar_core::{MAX_LENGTH, MAX_LENGTH_LIMIT};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "casevar", version)]
#[command(about = "Print every upper/lower case variant of a word, one per line")]
pub struct Args {
    /// Word to permute (prompted for on stdin when omitted); may start with `-`
    #[arg(conflicts_with = "wordlist", allow_hyphen_values = true)]
    pub word: Option<String>,

    /// File to write the variants to, created or truncated (default: stdout)
    #[arg(requires = "word", conflicts_with = "output")]
    pub output_path: Option<PathBuf>,

    /// Read words from a file, one per line; blank lines are skipped
    #[arg(short = 'f', long, value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// File to write the variants to
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Characters taken from each word; the rest is dropped
    #[arg(long, value_name = "N", default_value_t = MAX_LENGTH, value_parser = parse_max_length)]
    pub max_length: usize,

    /// Write "Permutations for word: <word>" before each word's variants
    #[arg(long)]
    pub header: bool,

    /// Print the number of variants per word instead of the variants
    #[arg(long)]
    pub count: bool,

    /// Raise log verbosity on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Destination file, from either the positional argument or `--output`.
    pub fn destination(&self) -> Option<&Path> {
        self.output_path.as_deref().or(self.output.as_deref())
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn parse_max_length(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a character count", s))?;
    if n > MAX_LENGTH_LIMIT {
        return Err(format!("at most {} characters are supported", MAX_LENGTH_LIMIT));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("casevar").chain(argv.iter().copied()))
    }

    #[test]
    fn no_arguments_means_interactive_stdout() {
        let args = parse(&[]).unwrap();
        assert!(args.word.is_none());
        assert!(args.destination().is_none());
        assert_eq!(args.max_length, MAX_LENGTH);
    }

    #[test]
    fn positional_word_and_output() {
        let args = parse(&["abc", "out.txt"]).unwrap();
        assert_eq!(args.word.as_deref(), Some("abc"));
        assert_eq!(args.destination(), Some(Path::new("out.txt")));
    }

    #[test]
    fn output_flag_is_a_destination() {
        let args = parse(&["-f", "words.txt", "-o", "out.txt"]).unwrap();
        assert_eq!(args.wordlist.as_deref(), Some(Path::new("words.txt")));
        assert_eq!(args.destination(), Some(Path::new("out.txt")));
    }

    #[test]
    fn wordlist_conflicts_with_word() {
        assert!(parse(&["abc", "-f", "words.txt"]).is_err());
    }

    #[test]
    fn two_destinations_conflict() {
        assert!(parse(&["abc", "out.txt", "-o", "other.txt"]).is_err());
    }

    #[test]
    fn word_may_start_with_a_hyphen() {
        for word in ["-x1", "-1", "-pass"] {
            let args = parse(&[word]).unwrap();
            assert_eq!(args.word.as_deref(), Some(word));
        }
    }

    #[test]
    fn known_flags_still_parse_before_a_hyphen_word() {
        let args = parse(&["-v", "--count", "-x1", "out.txt"]).unwrap();
        assert_eq!(args.verbose, 1);
        assert!(args.count);
        assert_eq!(args.word.as_deref(), Some("-x1"));
        assert_eq!(args.destination(), Some(Path::new("out.txt")));

        let args = parse(&["-f", "words.txt", "-o", "out.txt"]).unwrap();
        assert!(args.word.is_none());
        assert_eq!(args.wordlist.as_deref(), Some(Path::new("words.txt")));
    }

    #[test]
    fn double_dash_passes_a_word_made_of_flag_letters() {
        let args = parse(&["--", "-v"]).unwrap();
        assert_eq!(args.word.as_deref(), Some("-v"));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn max_length_is_bounded() {
        assert_eq!(parse(&["--max-length", "63", "x"]).unwrap().max_length, 63);
        assert!(parse(&["--max-length", "64", "x"]).is_err());
        assert!(parse(&["--max-length", "lots", "x"]).is_err());
    }

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(parse(&["x"]).unwrap().log_level(), "warn");
        assert_eq!(parse(&["-v", "x"]).unwrap().log_level(), "info");
        assert_eq!(parse(&["-vvv", "x"]).unwrap().log_level(), "debug");
    }

    #[test]
    fn definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
