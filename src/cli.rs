// src/cli.rs
use std::{env, path::PathBuf};

use color_eyre::eyre::{bail, eyre, Result, WrapErr};

use crate::{
    board::Board,
    config::options::{AppOptions, DataSource, OutputFormat},
    file,
    filter::{EducationFilter, FilterCriteria},
    render::{Notice, NullView},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Cities,
    Education,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub options: AppOptions,
    pub criteria: FilterCriteria,
    pub list: Option<ListKind>,
    pub help: bool,
}

pub fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let source = &args.options.source;
    logf!("CLI: source={} criteria={:?}", source.describe(), args.criteria);

    let mut board = Board::new();
    let mut sink = NullView;
    if let Err(e) = board.load(source, &mut sink) {
        eprintln!("{}", Notice::LoadFailed.message());
        return Err(e).wrap_err_with(|| format!("Failed to load {}", source.describe()));
    }

    if let Some(kind) = args.list {
        let list = match kind {
            ListKind::Cities => board.city_choices(),
            ListKind::Education => board.education_choices(),
        };
        for opt in list.derived() {
            println!("{}", opt.value);
        }
        return Ok(());
    }

    // Drive the same input events the GUI sends.
    board.on_text_input(&args.criteria.text, &mut sink);
    board.on_education_change(args.criteria.education.option_value(), &mut sink);
    board.on_city_change(args.criteria.city.as_deref().unwrap_or(""), &mut sink);

    let view = board.filtered();
    let contents = file::to_export_string(args.options.output.format, &view)?;
    if let Some(path) = file::write_output(&args.options.output, &contents)
        .map_err(|e| eyre!("{e}"))?
    {
        eprintln!("Wrote {} record(s) to {}", view.len(), path.display());
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--data" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --data"))?;
                out.options.source = DataSource::parse(&v).map_err(|e| eyre!(e))?;
            }
            "-q" | "--query" => {
                out.criteria.text = args.next().ok_or_else(|| eyre!("Missing value for --query"))?;
            }
            "--education" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --education"))?;
                out.criteria.education = EducationFilter::from_option_value(&v);
            }
            "--city" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --city"))?;
                out.criteria.set_city(&v);
            }
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                out.options.output.format = match v.to_ascii_lowercase().as_str() {
                    "text" | "txt" => OutputFormat::Text,
                    "html" => OutputFormat::Html,
                    "json" => OutputFormat::Json,
                    other => bail!("Unknown format: {}", other),
                };
            }
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| eyre!("Missing output path"))?;
                out.options.output.out = Some(PathBuf::from(v));
            }
            "--list-cities" => out.list = Some(ListKind::Cities),
            "--list-education" => out.list = Some(ListKind::Education),
            "-h" | "--help" => out.help = true,
            _ => bail!("Unknown arg: {}", a),
        }
    }
    Ok(out)
}
