//! Binary entry point for the Enlace text-protocol inspection CLI.
//!
//! Runs the driver's rewriter and decoders against text supplied on the
//! command line, which is handy when diagnosing wire-format disagreements
//! without a live server round-trip.
#![forbid(unsafe_code)]

use std::error::Error;
use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use nu_ansi_term::Color;
use tracing_subscriber::EnvFilter;

use enlace::{graph, query, GraphType};

#[derive(Parser, Debug)]
#[command(
    name = "enlace",
    version,
    about = "Inspection CLI for the Enlace driver text protocol",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for structured responses"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Rewrite $name parameters in a query to positional markers")]
    Rewrite {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    #[command(about = "Decode one graph-typed column value from its wire text")]
    Decode {
        #[arg(long = "type", value_enum, help = "Server type of the value")]
        value_type: TypeArg,

        #[arg(value_name = "TEXT")]
        text: String,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum TypeArg {
    Graphid,
    Vertex,
    Edge,
    Graphpath,
    GraphidArray,
}

impl From<TypeArg> for GraphType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Graphid => GraphType::GraphId,
            TypeArg::Vertex => GraphType::Vertex,
            TypeArg::Edge => GraphType::Edge,
            TypeArg::Graphpath => GraphType::Path,
            TypeArg::GraphidArray => GraphType::GraphIdArray,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Rewrite { query } => {
            let rewritten = query::rewrite(query)?;
            match cli.format {
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "sql": rewritten.sql(),
                        "parameters": rewritten.parameter_names(),
                    });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Text => {
                    print_row("sql", rewritten.sql());
                    for (i, name) in rewritten.parameter_names().iter().enumerate() {
                        print_row(&format!("${}", i + 1), name);
                    }
                }
            }
        }
        Command::Decode { value_type, text } => {
            let value = graph::decode((*value_type).into(), text)?;
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                OutputFormat::Text => {
                    print_row(&value.graph_type().to_string(), &value);
                }
            }
        }
    }
    Ok(())
}

fn print_row(key: &str, value: impl std::fmt::Display) {
    if std::io::stdout().is_terminal() {
        println!("{} {value}", Color::Cyan.paint(format!("{key}:")));
    } else {
        println!("{key}: {value}");
    }
}
