//! sid - Structural identity CLI tool
//!
//! Inspects lists inside YAML/JSON documents: which field identifies their
//! entries, what the entries are called, and how two versions pair up.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use structural_identity::namedlist::{split_name_and_data, IdentifierPriority, NamedList};
use structural_identity::term::{Presentation, TerminalSettings};
use structural_identity::{grab_str, value, Value};

#[derive(Debug, Parser)]
#[command(
    name = "sid",
    about = "Resolve identity fields of lists in YAML/JSON documents",
    version
)]
struct Cli {
    /// Output location. Use '-' for stdout
    #[arg(short, long, global = true, default_value = "-")]
    output: String,

    /// When to color output
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Fixed output width, overriding terminal detection
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Additional identifier fields, ranked after name, key and id
    #[arg(long = "additional-identifier", global = true)]
    additional_identifiers: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the identifier field of the list at a path
    Identifier {
        file: PathBuf,
        /// Path to the list (go-patch or dot style)
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Print the names of the entries of the named list at a path
    Names {
        file: PathBuf,
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Print the value at a path as YAML
    Get { file: PathBuf, path: String },
    /// Pair the entries of two versions of a list by identity
    Pair {
        #[arg(long)]
        lhs: PathBuf,
        #[arg(long)]
        rhs: PathBuf,
        #[arg(long, default_value = "/")]
        path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Output sink plus the presentation decisions derived from the terminal.
struct Output {
    sink: Box<dyn Write>,
    color: bool,
    true_color: bool,
    width: Option<usize>,
}

impl Output {
    fn open(cli: &Cli, presentation: &Presentation) -> CliResult<Self> {
        let to_stdout = cli.output == "-";
        let sink: Box<dyn Write> = if to_stdout {
            Box::new(io::stdout())
        } else {
            Box::new(
                fs::File::create(&cli.output)
                    .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
            )
        };

        let terminal = presentation.terminal();
        let color = match cli.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                to_stdout
                    && !terminal.dumb
                    && !terminal.no_color
                    && io::stdout().is_terminal()
            }
        };
        let width = (to_stdout || cli.width.is_some()).then_some(terminal.width);

        Ok(Output {
            sink,
            color,
            true_color: terminal.true_color,
            width,
        })
    }

    fn fit(&self, text: &str) -> String {
        match self.width {
            Some(width) if text.chars().count() > width => {
                let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
                cut.push('…');
                cut
            }
            _ => text.to_string(),
        }
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        let text = self.fit(text);
        writeln!(self.sink, "{}", text)
    }

    fn marked(&mut self, marker: Marker, text: &str) -> io::Result<()> {
        let plain = self.fit(&format!("{} {}", marker.symbol(), text));
        if !self.color {
            return writeln!(self.sink, "{}", plain);
        }
        let code = if self.true_color {
            marker.rgb()
        } else {
            marker.ansi()
        };
        writeln!(self.sink, "\x1b[{}m{}\x1b[0m", code, plain)
    }
}

#[derive(Debug, Clone, Copy)]
enum Marker {
    Same,
    Changed,
    Removed,
    Added,
}

impl Marker {
    fn symbol(self) -> char {
        match self {
            Marker::Same => '=',
            Marker::Changed => '~',
            Marker::Removed => '-',
            Marker::Added => '+',
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Marker::Same => "2",
            Marker::Changed => "33",
            Marker::Removed => "31",
            Marker::Added => "32",
        }
    }

    fn rgb(self) -> &'static str {
        match self {
            Marker::Same => "38;2;128;128;128",
            Marker::Changed => "38;2;230;180;60",
            Marker::Removed => "38;2;215;80;80",
            Marker::Added => "38;2;90;190;110",
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let presentation = Presentation::new(TerminalSettings {
        fixed_width: cli.width,
        fixed_height: None,
    });
    let priority =
        IdentifierPriority::default().with_additional(cli.additional_identifiers.clone());
    let mut output = Output::open(&cli, &presentation)?;

    match &cli.command {
        Command::Identifier { file, path } => {
            let document = load(file)?;
            let list = list_at(&document, path)?;
            match NamedList::resolve(list, &priority) {
                Some(named) => output.line(named.identifier())?,
                None => output.line("none")?,
            }
        }
        Command::Names { file, path } => {
            let document = load(file)?;
            let list = list_at(&document, path)?;
            let named = NamedList::resolve(list, &priority)
                .ok_or_else(|| format!("List at '{}' has no identifier field", path))?;
            for name in named.names()? {
                output.line(&name)?;
            }
        }
        Command::Get { file, path } => {
            let document = load(file)?;
            let found = grab_str(&document, path)?;
            let yaml = value::to_yaml(found)
                .map_err(|e| format!("Failed to serialize result: {}", e))?;
            write!(output.sink, "{}", yaml)?;
        }
        Command::Pair { lhs, rhs, path } => {
            let from_doc = load(lhs)?;
            let to_doc = load(rhs)?;
            pair(&mut output, &from_doc, &to_doc, path, &priority)?;
        }
    }

    output.sink.flush()?;
    Ok(())
}

fn pair(
    output: &mut Output,
    from_doc: &Value,
    to_doc: &Value,
    path: &str,
    priority: &IdentifierPriority,
) -> CliResult<()> {
    let from_list = list_at(from_doc, path)?;
    let to_list = list_at(to_doc, path)?;

    let from = NamedList::resolve(from_list, priority)
        .ok_or_else(|| format!("LHS list at '{}' has no identifier field", path))?;
    let to = NamedList::resolve(to_list, priority)
        .filter(|to| to.identifier() == from.identifier())
        .ok_or_else(|| {
            format!(
                "RHS list at '{}' is not identified by '{}'",
                path,
                from.identifier()
            )
        })?;

    let pairing = from.pair_with(&to)?;
    for matched in &pairing.matched {
        let (_, before) = split_name_and_data(matched.from, from.identifier());
        let (_, after) = split_name_and_data(matched.to, from.identifier());
        let marker = if before == after {
            Marker::Same
        } else {
            Marker::Changed
        };
        output.marked(marker, &matched.name)?;
    }
    for name in &pairing.removed {
        output.marked(Marker::Removed, name)?;
    }
    for name in &pairing.added {
        output.marked(Marker::Added, name)?;
    }
    Ok(())
}

fn load(file: &Path) -> CliResult<Value> {
    let content =
        fs::read_to_string(file).map_err(|e| format!("Failed to read file {:?}: {}", file, e))?;
    let is_json = file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let document = if is_json {
        value::from_json(&content).map_err(|e| format!("Failed to parse {:?}: {}", file, e))?
    } else {
        value::from_yaml(&content).map_err(|e| format!("Failed to parse {:?}: {}", file, e))?
    };
    Ok(document)
}

fn list_at<'a>(document: &'a Value, path: &str) -> CliResult<&'a [Value]> {
    match grab_str(document, path)? {
        Value::List(list) => Ok(list.as_slice()),
        other => Err(format!("Value at '{}' is a {}, not a list", path, other.kind()).into()),
    }
}
