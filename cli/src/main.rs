//! richdoc CLI - render rich-text document JSON to HTML

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use richdoc::{render_html, Document};

#[derive(Parser)]
#[command(name = "richdoc")]
#[command(version)]
#[command(about = "Render rich-text document JSON to semantic HTML", long_about = None)]
struct Cli {
    /// Input document JSON file ("-" or omitted reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the document to HTML (default)
    Html {
        /// Input document JSON file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Extract the raw text content of the document
    Text {
        /// Input document JSON file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Echo the parsed document as normalized JSON
    Json {
        /// Input document JSON file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input document JSON file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html { input, output }) => cmd_html(input.as_deref(), output.as_deref()),
        Some(Commands::Text { input, output }) => cmd_text(input.as_deref(), output.as_deref()),
        Some(Commands::Json {
            input,
            compact,
            output,
        }) => cmd_json(input.as_deref(), compact, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(input.as_deref()),
        None => cmd_html(cli.input.as_deref(), cli.output.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn cmd_html(input: Option<&Path>, output: Option<&Path>) -> richdoc::Result<()> {
    let doc = load_document(input)?;
    write_output(&render_html(&doc), output)
}

fn cmd_text(input: Option<&Path>, output: Option<&Path>) -> richdoc::Result<()> {
    let doc = load_document(input)?;
    write_output(&doc.plain_text(), output)
}

fn cmd_json(input: Option<&Path>, compact: bool, output: Option<&Path>) -> richdoc::Result<()> {
    let doc = load_document(input)?;
    let json = if compact {
        serde_json::to_string(&doc)?
    } else {
        serde_json::to_string_pretty(&doc)?
    };
    write_output(&json, output)
}

fn cmd_info(input: Option<&Path>) -> richdoc::Result<()> {
    let doc = load_document(input)?;
    let text = doc.plain_text();
    println!("{} {}", "Top-level nodes:".cyan(), doc.node_count());
    println!("{} {}", "Text characters:".cyan(), text.chars().count());
    println!("{} {}", "HTML bytes:".cyan(), render_html(&doc).len());
    Ok(())
}

fn load_document(input: Option<&Path>) -> richdoc::Result<Document> {
    let json = match input {
        Some(path) if path != Path::new("-") => {
            log::debug!("reading document from {}", path.display());
            fs::read_to_string(path)?
        }
        _ => {
            log::debug!("reading document from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    richdoc::from_json(&json)
}

fn write_output(content: &str, output: Option<&Path>) -> richdoc::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{} {}", "wrote".green(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
