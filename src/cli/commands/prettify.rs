use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::PrettifyArgs;
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::{
    config::{Config, load_config, load_config_file},
    job::Job,
    markup::Palette,
};

pub fn prettify(args: &PrettifyArgs) -> Result<ExitStatus> {
    let Some(paths) = args.paths() else {
        report::print_usage();
        return Ok(ExitStatus::Failure);
    };

    let config = resolve_config(args)?;
    let palette = if args.no_color || !config.color {
        Palette::Plain
    } else {
        Palette::Ansi
    };

    let outcome = Job {
        input: &paths.input,
        output: &paths.output,
        lookup: &paths.lookup,
        columns: &config.columns,
        palette,
    }
    .run()?;

    if args.print {
        println!("{}", outcome.rewrite.text);
    }
    report::print_outcome(&outcome, &paths.output, args.verbose);

    Ok(ExitStatus::Success)
}

fn resolve_config(args: &PrettifyArgs) -> Result<Config> {
    if let Some(path) = &args.config {
        return load_config_file(path);
    }

    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    if !loaded.from_file && args.verbose {
        eprintln!(
            "{}",
            "No .itineraryrc.json found, using default config".dimmed()
        );
    }
    Ok(loaded.config)
}
