use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use log::LevelFilter;
use miette::NamedSource;
use tally_lib::input::parse_token;
use tally_lib::json::counts_to_json;
use tally_lib::{make_count_dictionary, Counts, Key, TallyError};

#[cfg(feature = "repl")]
mod repl;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "Counts how often each distinct value occurs")]
struct Cli {
    /// Values to count, each one is read as JSON if possible and as a string otherwise
    values: Vec<String>,

    /// Read a JSON array or whitespace separated values from a file, `-` reads stdin
    #[arg(short, long, conflicts_with = "values")]
    file: Option<PathBuf>,

    /// Print one `value: count` line per value, highest count first, `--most-common=N` keeps only
    /// the first N
    #[arg(long, value_name = "N", require_equals = true)]
    most_common: Option<Option<usize>>,

    #[arg(long, conflicts_with = "most_common")]
    json: bool,

    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy)]
pub(crate) enum Format {
    Dictionary,
    MostCommon(Option<usize>),
    Json,
}

impl Format {
    pub(crate) fn render(self, counts: &Counts<Key>) -> String {
        match self {
            Format::Dictionary => counts.to_string(),
            Format::MostCommon(n) => counts
                .most_common(n)
                .into_iter()
                .map(|(key, count)| format!("{key}: {count}"))
                .collect::<Vec<_>>()
                .join("\n"),
            Format::Json => counts_to_json(counts).to_string(),
        }
    }
}

pub(crate) fn into_miette_result<T>(result: Result<T, TallyError>) -> miette::Result<T> {
    match result {
        Err(err) => Err(err)?,
        Ok(val) => Ok(val),
    }
}

fn read_input(path: &Path, mut stdin: impl Read) -> anyhow::Result<(String, String)> {
    if path == Path::new("-") {
        let mut string = String::new();
        stdin.read_to_string(&mut string)?;
        return Ok(("<stdin>".to_string(), string));
    }

    // Keep a copy of the filename for error reporting
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), ToString::to_string);

    Ok((filename, fs::read_to_string(path)?))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let format = match (cli.most_common, cli.json) {
        (Some(n), _) => Format::MostCommon(n),
        (None, true) => Format::Json,
        (None, false) => Format::Dictionary,
    };

    if let Some(path) = cli.file {
        let (filename, string) = read_input(&path, std::io::stdin())?;
        log::debug!("read {} bytes from {filename}", string.len());

        match into_miette_result(tally_lib::run_str(&string)) {
            Ok(counts) => println!("{}", format.render(&counts)),
            Err(report) => {
                let report = report.with_source_code(NamedSource::new(filename, string));
                eprintln!("{report:?}");
                exit(1);
            }
        }
    } else if !cli.values.is_empty() {
        let values = cli.values.iter().map(|v| parse_token(v)).collect::<Vec<_>>();
        log::debug!("counting {} values from the command line", values.len());

        match make_count_dictionary(&values) {
            Ok(counts) => println!("{}", format.render(&counts)),
            Err(err) => {
                eprintln!("{:?}", miette::Report::new(err));
                exit(1);
            }
        }
    } else {
        #[cfg(feature = "repl")]
        repl::run(format)?;

        #[cfg(not(feature = "repl"))]
        Err(anyhow::anyhow!("You must supply values or a file"))?;
    }

    Ok(())
}
