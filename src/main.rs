//! Command-line interface for the conventional-shields binary.
//!
//! The CLI prints badge URLs or markdown images for a label and decorations,
//! generates the badge catalogue, renders catalogue markdown and the badge
//! examples document.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use conventional_shields::{
    BadgeCatalog, BadgeStyle, ColorTable, ConventionalBadgeRequest, Decoration, Error, Label,
    Palette, build_conventional_badge_with, load_catalog, load_palette, markdown_image,
    output_io_error, render_examples, render_grid, render_recap, write_catalog,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const STDOUT_PATH: &str = "<stdout>";

/// Command line interface for generating Conventional Comments badges.
#[derive(Debug, Parser,)]
#[command(
    name = "conventional-shields",
    version,
    about = "Shields.io badges for Conventional Comments"
)]
struct Cli
{
    #[command(subcommand)]
    command: Command,

    /// Palette file (JSON or YAML) replacing the built-in palette.
    #[arg(long = "palette", value_name = "PATH", env = "CONVENTIONAL_SHIELDS_PALETTE", global = true)]
    palette: Option<PathBuf,>,
}

#[derive(Debug, Subcommand,)]
enum Command
{
    /// Print the badge URL for a label and optional decorations.
    Generate(GenerateArgs,),
    /// Generate the badge catalogue as JSON.
    Catalog(CatalogArgs,),
    /// Render markdown from a catalogue file.
    Recap(RecapArgs,),
    /// Render the badge examples document for the active palette.
    Examples(ExamplesArgs,),
    /// Print the active palette as JSON.
    Palette,
}

#[derive(Debug, Args, Default,)]
struct GenerateArgs
{
    /// Conventional Comments label, for example `issue`.
    #[arg(value_name = "LABEL")]
    label: String,

    /// Decorations in display order; the first one colors the message.
    #[arg(value_name = "DECORATIONS")]
    decorations: Vec<String,>,

    /// Visual preset (flat, flat-square, plastic, for-the-badge, social).
    #[arg(long = "style", value_name = "STYLE", value_parser = parse_style)]
    style: Option<BadgeStyle,>,

    /// Keep explicit colors instead of deriving them from the label.
    #[arg(long = "manual", action = ArgAction::SetTrue)]
    manual: bool,

    /// Message color used with --manual.
    #[arg(long = "color", value_name = "COLOR")]
    color: Option<String,>,

    /// Label color used with --manual.
    #[arg(long = "label-color", value_name = "COLOR")]
    label_color: Option<String,>,

    #[arg(long = "logo", value_name = "SLUG")]
    logo: Option<String,>,

    #[arg(long = "logo-color", value_name = "COLOR")]
    logo_color: Option<String,>,

    #[arg(long = "logo-size", value_name = "SIZE")]
    logo_size: Option<String,>,

    #[arg(long = "cache-seconds", value_name = "SECONDS")]
    cache_seconds: Option<u64,>,

    /// Link target; repeat for left and right links.
    #[arg(long = "link", value_name = "URL")]
    links: Vec<String,>,

    /// Print a markdown image instead of the raw URL.
    #[arg(long = "markdown", action = ArgAction::SetTrue)]
    markdown: bool,
}

#[derive(Debug, Args,)]
struct CatalogArgs
{
    /// Write the catalogue to this file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,

    /// Output formatted JSON on stdout.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct RecapArgs
{
    /// Catalogue produced by the `catalog` subcommand.
    #[arg(long = "catalog", value_name = "PATH")]
    catalog: PathBuf,

    /// Render the compact badge grid instead of the full recap.
    #[arg(long = "grid", action = ArgAction::SetTrue)]
    grid: bool,

    /// Write the markdown to this file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,
}

#[derive(Debug, Args,)]
struct ExamplesArgs
{
    /// Write the markdown to this file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt()
        .with_env_filter(filter,)
        .with_writer(io::stderr,)
        .without_time()
        .init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates palette, catalogue and output errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let palette = resolve_palette(cli.palette.as_deref(),)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Generate(args,) => {
            let table = ColorTable::from_palette(&palette,);
            write_line(&mut handle, &render_generate(&args, &table,),)
        }
        Command::Catalog(args,) => run_catalog(&args, &palette, &mut handle,),
        Command::Recap(args,) => run_recap(&args, &mut handle,),
        Command::Examples(args,) => run_examples(&args, &palette, &mut handle,),
        Command::Palette => {
            serde_json::to_writer_pretty(&mut handle, &palette,)?;
            write_line(&mut handle, "",)
        }
    }
}

fn resolve_palette(path: Option<&Path,>,) -> Result<Palette, Error,>
{
    match path {
        Some(path,) => load_palette(path,),
        None => {
            debug!("Using built-in palette");
            Ok(Palette::builtin().clone(),)
        }
    }
}

fn parse_style(value: &str,) -> Result<BadgeStyle, String,>
{
    value.parse::<BadgeStyle>().map_err(|error| error.to_display_string(),)
}

fn render_generate(args: &GenerateArgs, table: &ColorTable,) -> String
{
    if Label::from_token(&args.label,).is_none() {
        warn!("Unknown label '{}', leaving its color unset", args.label);
    }
    for decoration in &args.decorations {
        if Decoration::from_token(decoration,).is_none() {
            warn!("Unknown decoration '{}'", decoration);
        }
    }

    let request = ConventionalBadgeRequest {
        label:         args.label.clone(),
        decorations:   args.decorations.clone(),
        auto_color:    !args.manual,
        color:         args.color.clone(),
        label_color:   args.label_color.clone(),
        style:         args.style,
        logo:          args.logo.clone(),
        logo_color:    args.logo_color.clone(),
        logo_size:     args.logo_size.clone(),
        cache_seconds: args.cache_seconds,
        links:         args.links.clone(),
    };
    let url = build_conventional_badge_with(table, &request,);

    if args.markdown { markdown_image(&args.label, &url,) } else { url }
}

fn run_catalog<W: io::Write,>(
    args: &CatalogArgs,
    palette: &Palette,
    writer: &mut W,
) -> Result<(), Error,>
{
    let catalog = BadgeCatalog::generate(palette,);

    match args.output.as_deref() {
        Some(path,) => write_catalog(&catalog, path,),
        None if args.pretty => {
            serde_json::to_writer_pretty(&mut *writer, &catalog,)?;
            write_line(writer, "",)
        }
        None => {
            serde_json::to_writer(&mut *writer, &catalog,)?;
            write_line(writer, "",)
        }
    }
}

fn run_recap<W: io::Write,>(args: &RecapArgs, writer: &mut W,) -> Result<(), Error,>
{
    let catalog = load_catalog(&args.catalog,)?;
    let markdown = if args.grid { render_grid(&catalog,) } else { render_recap(&catalog,) };

    emit_markdown(&markdown, args.output.as_deref(), writer,)
}

fn run_examples<W: io::Write,>(
    args: &ExamplesArgs,
    palette: &Palette,
    writer: &mut W,
) -> Result<(), Error,>
{
    let markdown = render_examples(palette,);
    debug!("Rendered badge examples for {} palette colors", palette.len());

    emit_markdown(&markdown, args.output.as_deref(), writer,)
}

fn emit_markdown<W: io::Write,>(
    markdown: &str,
    output: Option<&Path,>,
    writer: &mut W,
) -> Result<(), Error,>
{
    match output {
        Some(path,) => {
            if let Some(parent,) = path.parent().filter(|parent| !parent.as_os_str().is_empty(),) {
                fs::create_dir_all(parent,).map_err(|source| output_io_error(parent, source,),)?;
            }
            fs::write(path, markdown,).map_err(|source| output_io_error(path, source,),)
        }
        None => writer
            .write_all(markdown.as_bytes(),)
            .map_err(|source| output_io_error(Path::new(STDOUT_PATH,), source,),),
    }
}

fn write_line<W: io::Write,>(writer: &mut W, line: &str,) -> Result<(), Error,>
{
    writeln!(writer, "{line}").map_err(|source| output_io_error(Path::new(STDOUT_PATH,), source,),)
}
