//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use chatstats::ChatstatsError;
use chatstats::analysis::{LexicalAnalyzer, Stopwords, UnicodeEmojiFilter};
use chatstats::cli::Args;
use chatstats::config::AnalysisConfig;
use chatstats::core::{ChatReport, FilterConfig, apply_filters};
use chatstats::format::{OutputFormat, to_format_string, write_to_format};
use chatstats::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chatstats={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let filter_config = build_filter(args)?;
    let stopwords = load_stopwords(args)?;

    let parser = TranscriptParser::new();
    tracing::info!(input = %args.input, parser = parser.name(), "parsing");
    let transcript = parser.parse(Path::new(&args.input))?;
    tracing::info!(
        messages = transcript.len(),
        dropped_lines = transcript.dropped_lines(),
        "parsed transcript"
    );

    let transcript = apply_filters(transcript, &filter_config);

    let config = AnalysisConfig::new()
        .with_conversation_gap_minutes(args.gap)
        .with_top_words(args.top);
    let lexical = LexicalAnalyzer::new(stopwords, UnicodeEmojiFilter).with_top_n(args.top);
    let report = ChatReport::build(&transcript, &config, &lexical);

    let format: OutputFormat = args.format.into();
    match args.output {
        Some(ref path) => {
            write_to_format(&report, path, format)?;
            tracing::info!(output = %path, %format, "report written");
        }
        None => {
            let rendered = to_format_string(&report, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}

fn build_filter(args: &Args) -> Result<FilterConfig, ChatstatsError> {
    let mut filter_config = FilterConfig::new();
    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
    }
    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
    }
    if let Some(ref from) = args.from {
        filter_config = filter_config.with_sender(from.clone());
    }
    Ok(filter_config)
}

fn load_stopwords(args: &Args) -> Result<Stopwords, ChatstatsError> {
    let mut stopwords = if args.no_default_stopwords {
        Stopwords::empty()
    } else {
        Stopwords::italian()
    };
    if let Some(ref path) = args.stopwords {
        let extra = Stopwords::from_file(Path::new(path))?;
        tracing::debug!(path = %path, words = extra.len(), "loaded stopwords");
        stopwords.extend(extra);
    }
    Ok(stopwords)
}
