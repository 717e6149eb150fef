use std::fs::File;
use std::io::{BufRead, BufWriter, IntoInnerError, Write};
use std::path::Path;

use anyhow::{Context, Result};
use casevar_core::{write_variants, Word};
use tracing::{info, warn};

use crate::args::Args;
use crate::error::CliError;

/// Runs one invocation against the given terminal streams.
///
/// `input` is only read when neither a word nor a word list was given.
/// Variants go to `out` unless a destination file is set, in which case `out`
/// only receives the prompt and the closing confirmation line.
pub fn run<R, W>(args: &Args, mut input: R, mut out: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let words = match (&args.word, &args.wordlist) {
        (Some(word), _) => vec![word.clone()],
        (None, Some(path)) => read_wordlist(path)?,
        (None, None) => vec![prompt_for_word(&mut input, &mut out, args.max_length)?],
    };

    match args.destination() {
        None => {
            let mut sink = BufWriter::new(&mut out);
            let total = emit_all(args, &words, &mut sink)?;
            sink.flush().context("Failed to write output")?;
            info!(variants = total, count_only = args.count, "finished writing to stdout");
        }
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open file {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            let total = emit_all(args, &words, &mut sink)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            let file = sink
                .into_inner()
                .map_err(IntoInnerError::into_error)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            drop(file);
            info!(
                variants = total,
                count_only = args.count,
                path = %path.display(),
                "finished writing to file"
            );
            writeln!(out, "Permutations written to {}", path.display())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn prompt_for_word<R: BufRead, W: Write>(input: &mut R, out: &mut W, max_length: usize) -> Result<String> {
    write!(out, "Please enter the word (up to {} characters): ", max_length)?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Err(CliError::EndOfInput.into());
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn read_wordlist(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect();
    info!(words = words.len(), path = %path.display(), "loaded word list");
    Ok(words)
}

fn emit_all<W: Write>(args: &Args, words: &[String], sink: &mut W) -> Result<u64> {
    let mut total = 0;
    for raw in words {
        total += emit_word(args, raw, sink)?;
    }
    Ok(total)
}

fn emit_word<W: Write>(args: &Args, raw: &str, sink: &mut W) -> Result<u64> {
    let mut word = Word::with_max_length(raw, args.max_length)?;
    if word.is_truncated() {
        warn!(
            kept = word.len(),
            dropped = word.original_len() - word.len(),
            "word truncated to {} characters",
            args.max_length
        );
    }

    if args.count {
        let count = word.variant_count();
        writeln!(sink, "{}", count)?;
        return Ok(count);
    }

    if args.header {
        writeln!(sink, "Permutations for word: {}", word)?;
    }
    let written = write_variants(&mut word, sink)?;
    if args.header {
        writeln!(sink)?;
    }
    Ok(written)
}
