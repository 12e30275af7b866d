//! # mdexplorer
//!
//! Explore markdown documents section by section from the command line.
//!
//! ## Usage
//!
//! List the documents in `docs/`:
//! ```sh
//! mdexplorer files
//! ```
//!
//! Show the numbered section list of a document:
//! ```sh
//! mdexplorer sections docs/documentacion.md
//! ```
//!
//! Show a section by number or heading:
//! ```sh
//! mdexplorer show docs/documentacion.md 3
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Command, OutputFormat};
use color_eyre::Result;
use mdexplorer::content::{self, SearchHit};
use mdexplorer::input::{self, Extensions, FileInfo};
use mdexplorer::parser::{self, Document, DocumentOutput, SectionOutput};
use mdexplorer::{Config, export};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;

const RULE_WIDTH: usize = 60;

/// Per-invocation state handed to every command.
struct Session {
    config: Config,
    output: OutputFormat,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    init_logging(args.verbose);

    // Priority: CLI args > config file > defaults
    let mut config = Config::load();
    if let Some(ref root) = args.root {
        config.paths.project_root = Some(root.clone());
    }
    if args.max_length.is_some() {
        config.content.max_length = args.max_length;
    }

    let session = Session {
        config,
        output: args.output,
    };

    match args.command {
        Command::Files { dir, csv } => list_files(&session, dir, csv),
        Command::Sections { file } => print_sections(&session, &file),
        Command::Show {
            file,
            section,
            keep_figures,
        } => show_section(&session, &file, &section, keep_figures),
        Command::Stats { file } => print_stats(&session, &file),
        Command::Search { file, term } => search_document(&session, &file, &term),
        Command::Export { file, section, out } => export_section(&session, &file, &section, &out),
        Command::Info { file } => print_info(&session, &file),
        Command::Config { init } => show_config(&session, init),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn open_document(session: &Session, path: &Path) -> Document {
    match input::try_load(path, &session.config.encodings()) {
        Ok(loaded) => parser::parse_markdown(&loaded.text),
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
    }
}

fn find_section<'a>(doc: &'a Document, query: &str) -> (usize, &'a str, &'a str) {
    match doc.find_section(query) {
        Some((name, body)) => {
            let index = doc.sections.get_index_of(name).unwrap_or_default() + 1;
            (index, name, body)
        }
        None => {
            eprintln!("Section '{}' not found", query);
            if !doc.is_empty() {
                eprintln!("\nAvailable sections:");
                for (i, name) in doc.section_names().enumerate() {
                    eprintln!("  {:2}. {}", i + 1, name);
                }
            }
            process::exit(1);
        }
    }
}

/// Menu label for a heading: text before any parenthesised note.
fn menu_label(heading: &str) -> &str {
    match heading.split('(').next().map(str::trim) {
        Some(label) if !label.is_empty() => label,
        _ => heading,
    }
}

#[derive(Serialize)]
struct FileEntry {
    path: PathBuf,
    #[serde(flatten)]
    info: FileInfo,
}

fn list_files(session: &Session, dir: Option<PathBuf>, csv: bool) -> Result<()> {
    let config = &session.config;
    let (directory, extensions, priority) = if csv {
        (dir.unwrap_or_else(|| config.data_dir()), Extensions::csv(), None)
    } else {
        (
            dir.unwrap_or_else(|| config.docs_dir()),
            Extensions::markdown(),
            Some(config.discovery.priority.as_slice()),
        )
    };

    let files = input::discover(&directory, &extensions, priority);

    if session.output == OutputFormat::Json {
        let entries: Vec<FileEntry> = files
            .into_iter()
            .map(|path| FileEntry {
                info: input::file_info(&path),
                path,
            })
            .collect();
        return print_json(&entries);
    }

    if files.is_empty() {
        let kind = if csv { "CSV" } else { "markdown" };
        eprintln!("No {} files found in {}", kind, directory.display());
        return Ok(());
    }

    for path in &files {
        let info = input::file_info(path);
        println!("{:<40} {:>10}", info.name, info.size);
    }
    Ok(())
}

fn print_sections(session: &Session, path: &Path) -> Result<()> {
    let doc = open_document(session, path);

    if session.output == OutputFormat::Json {
        let root = session.config.project_root();
        let output = DocumentOutput::from_document(
            &doc,
            Some(path.display().to_string()),
            Some(input::file_info(path)),
            Some(&root),
        );
        return print_json(&output);
    }

    if doc.is_empty() {
        println!("Document is empty: {}", path.display());
        return Ok(());
    }

    println!("{}", doc.title);
    println!("{}", rule());
    for (i, name) in doc.section_names().enumerate() {
        println!("{:2}. {}", i + 1, menu_label(name));
    }
    Ok(())
}

fn show_section(session: &Session, path: &Path, query: &str, keep_figures: bool) -> Result<()> {
    let doc = open_document(session, path);
    let (index, name, body) = find_section(&doc, query);
    let content_config = &session.config.content;

    let root = session.config.project_root();
    let (image, without_images) = parser::extract_image(body, &root);

    let text = if keep_figures {
        body.to_string()
    } else if content_config.hide_figures {
        content::filter_for_terminal(&without_images)
    } else {
        without_images
    };
    let text = content::clean(&text, content_config.max_length);

    if session.output == OutputFormat::Json {
        return print_json(&SectionOutput {
            index,
            title: name.to_string(),
            content: text,
            image,
        });
    }

    println!("{}", rule());
    println!("  {}", name);
    println!("{}", rule());
    println!();
    println!("{}", text);
    if let Some(image) = image {
        let status = if image.exists { "" } else { " (missing)" };
        println!();
        println!(
            "[image] {}: {}{}",
            image.alt,
            image.resolved_path.display(),
            status
        );
    }
    println!("\n{}", rule());
    Ok(())
}

fn print_stats(session: &Session, path: &Path) -> Result<()> {
    let doc = open_document(session, path);
    let stats = doc.stats();
    let info = input::file_info(path);

    if session.output == OutputFormat::Json {
        #[derive(Serialize)]
        struct StatsOutput<'a> {
            title: &'a str,
            stats: content::Stats,
            file: FileInfo,
        }
        return print_json(&StatsOutput {
            title: &doc.title,
            stats,
            file: info,
        });
    }

    println!("{}", doc.title);
    println!("{}", rule());
    println!("Words:      {}", stats.words);
    println!("Lines:      {}", stats.lines);
    println!("Characters: {}", stats.characters);
    println!("Sections:   {}", stats.sections);
    println!("Size:       {}", info.size);
    Ok(())
}

fn search_document(session: &Session, path: &Path, term: &str) -> Result<()> {
    let doc = open_document(session, path);
    let hits: Vec<SearchHit> = content::search(&doc.sections, term);

    if session.output == OutputFormat::Json {
        return print_json(&hits);
    }

    if hits.is_empty() {
        println!("No results for '{}'", term);
        return Ok(());
    }

    println!("Found {} matches for '{}':\n", hits.len(), term);
    for hit in &hits {
        println!("{} (line {}):", hit.section, hit.line_number);
        println!("   {}\n", hit.line);
    }
    Ok(())
}

fn export_section(session: &Session, path: &Path, query: &str, out: &Path) -> Result<()> {
    let doc = open_document(session, path);
    let (_, name, body) = find_section(&doc, query);

    export::export_section(out, &format!("## {}\n\n{}\n", name, body))?;

    if session.output == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "section": name,
            "path": out,
        }));
    }
    println!("Exported '{}' to {}", name, out.display());
    Ok(())
}

fn print_info(session: &Session, path: &Path) -> Result<()> {
    let info = input::file_info(path);

    if session.output == OutputFormat::Json {
        return print_json(&info);
    }

    println!("Name:   {}", info.name);
    println!("Size:   {}", info.size);
    println!("Exists: {}", if info.exists { "yes" } else { "no" });
    Ok(())
}

fn show_config(session: &Session, init: bool) -> Result<()> {
    let path = Config::config_path();

    if init {
        match path {
            Some(ref path) if path.exists() => {
                println!("Config already exists: {}", path.display());
            }
            Some(ref path) => {
                Config::default().save()?;
                println!("Wrote default config to {}", path.display());
            }
            None => {
                eprintln!("Could not determine config directory");
                process::exit(1);
            }
        }
        return Ok(());
    }

    if session.output == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "path": path,
            "config": session.config,
        }));
    }

    match path {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no config directory"),
    }
    print!("{}", toml::to_string_pretty(&session.config)?);
    Ok(())
}
