// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod document;
mod logger;
mod report;

use std::{path::PathBuf, process::ExitCode};

use ada::{token_type_at, AdaVersion, Highlighter, Scanner};
use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;
use log::debug;

use self::{
    document::Document,
    logger::Logger,
    report::{Diagnostic, Severity},
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of a file
    Tokens {
        file: PathBuf,
    },

    /// Report lexical errors, and keywords the selected Ada version does not reserve
    Check {
        file: PathBuf,

        /// 83, 95, 2005 or 2012; overrides the configuration file
        #[arg(long)]
        ada_version: Option<AdaVersion>,
    },

    /// Print the type of the token at a one-based line and column
    At {
        file: PathBuf,
        line: usize,
        column: usize,
    },
}

fn main() -> ExitCode {
    let args = Args::parse_args();
    Logger::initialize(args.verbose);

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), format!("{e:#}").bold());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Tokens { file } => tokens(&Document::load(&file)?),
        Commands::Check { file, ada_version } => check(&Document::load(&file)?, ada_version),
        Commands::At { file, line, column } => at(&Document::load(&file)?, line, column),
    }
}

fn tokens(document: &Document) -> Result<ExitCode> {
    let scanner = Scanner::with_source(document.source.clone());
    for token in scanner {
        println!("{}", report::token_line(&token));
    }

    Ok(ExitCode::SUCCESS)
}

fn check(document: &Document, ada_version: Option<AdaVersion>) -> Result<ExitCode> {
    let version = ada_version.unwrap_or(document.config.lexer.ada_version);
    debug!("Checking {} against {version}", document.path().display());

    let (tokens, errors) = Scanner::with_source(document.source.clone()).collect_all();

    let mut diagnostics = Vec::new();
    for token in &tokens {
        if !token.is_valid() {
            diagnostics.push(Diagnostic::at_token(Severity::Error, token, token.text()));
        } else if token.is_keyword() && !version.contains(token.kind) {
            let message = match AdaVersion::introduced(token.kind) {
                Some(introduced) => format!("`{}` is reserved since {introduced}, not in {version}", token.name()),
                None => format!("`{}` is not reserved in {version}", token.name()),
            };
            diagnostics.push(Diagnostic::at_token(Severity::Warning, token, message));
        }
    }

    for diagnostic in &diagnostics {
        eprint!("{}", diagnostic.render(&document.source, document.path()));
    }

    let warnings = diagnostics.len() - errors.len();
    eprintln!("{}", summary(errors.len(), warnings));

    Ok(if errors.is_empty() { ExitCode::SUCCESS } else { ExitCode::from(1) })
}

fn at(document: &Document, line: usize, column: usize) -> Result<ExitCode> {
    let Some(text) = document.source.line(line) else {
        bail!("{} has no line {line}", document.path().display());
    };

    if column == 0 {
        bail!("columns start at 1");
    }

    let spans = Highlighter::with_version(document.config.lexer.ada_version).highlight_line(text);
    println!("{}", token_type_at(&spans, column - 1).name());
    Ok(ExitCode::SUCCESS)
}

fn summary(errors: usize, warnings: usize) -> String {
    fn plural(count: usize, noun: &str) -> String {
        if count == 1 {
            format!("1 {noun}")
        } else {
            format!("{count} {noun}s")
        }
    }

    format!("{}, {}", plural(errors, "error"), plural(warnings, "warning"))
}
