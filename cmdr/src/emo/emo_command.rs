// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Read;

use miette::IntoDiagnostic;
use r3bl_emoji::{Catalog, CatalogConfig, CommonResult, ok, try_init_global_catalog};

use super::{CLIArg, CLICommand, InputArg, ui_str};

/// Bytes to write to stdout once a command has run. Not always valid `UTF-8`, since
/// `filter` and `replace` pass invalid input bytes through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmoOutput(pub Vec<u8>);

impl From<String> for EmoOutput {
    fn from(it: String) -> Self { Self(it.into_bytes()) }
}

/// Build the global catalog for `cli_arg`, read its input, and run its command.
///
/// # Errors
///
/// If the catalog can't be built, or stdin can't be read.
pub fn try_run_command(cli_arg: &CLIArg) -> CommonResult<EmoOutput> {
    let config = CatalogConfig::from(&cli_arg.global_options);
    let catalog = try_init_global_catalog(config)?;

    let input = match cli_arg.command.input() {
        Some(input_arg) => try_read_input(input_arg, std::io::stdin().lock())?,
        None => vec![],
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🚀 Running command",
        config = ?config,
        input_len = %input.len()
    );

    ok!(run_command(catalog, &cli_arg.command, &input))
}

/// The words joined with spaces, or everything in `stdin` when there are no words.
///
/// # Errors
///
/// If `stdin` can't be read.
pub fn try_read_input(input_arg: &InputArg, mut stdin: impl Read) -> CommonResult<Vec<u8>> {
    if !input_arg.words.is_empty() {
        return ok!(input_arg.words.join(" ").into_bytes());
    }

    let mut acc = vec![];
    stdin.read_to_end(&mut acc).into_diagnostic()?;
    ok!(acc)
}

/// Run `command` over `input`. Commands that print text add a trailing newline, unless
/// the output already ends with one.
#[must_use]
pub fn run_command(catalog: &Catalog, command: &CLICommand, input: &[u8]) -> EmoOutput {
    let mut output: EmoOutput = match command {
        CLICommand::Has { .. } => {
            ui_str::has_emoji_msg(catalog.has_emoji_bytes(input)).to_string().into()
        }
        CLICommand::Filter { .. } => EmoOutput(catalog.filter_emoji_bytes(input)),
        CLICommand::Replace { with, .. } => {
            EmoOutput(catalog.replace_emoji_bytes(input, |_| with.as_bytes()))
        }
        CLICommand::Len { .. } => catalog.human_read_len_bytes(input).to_string().into(),
        CLICommand::Dump { .. } => catalog.dump_bytes(input).into(),
        CLICommand::Catalog {} => ui_str::catalog_summary_msg(catalog).into(),
    };

    if output.0.last() != Some(&b'\n') {
        output.0.push(b'\n');
    }
    output
}
