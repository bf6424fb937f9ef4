// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::io::Write;

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_emoji::{CommonResult, ok, try_initialize_logging_global};
use r3bl_emoji_cmdr::{CLIArg, EmoOutput, try_run_command, ui_str};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CliArgs` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let res = match try_run_command(&cli_arg) {
        Ok(output) => display_output(&output),
        Err(report) => Err(report_unrecoverable_errors(report)),
    };

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    res
}

fn display_output(output: &EmoOutput) -> CommonResult<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output.0).into_diagnostic()?;
    stdout.flush().into_diagnostic()?;
    ok!()
}

/// Log the error, and add context to it. The miette hook prints it when `main` returns.
fn report_unrecoverable_errors(report: miette::Report) -> miette::Report {
    // % is Display, ? is Debug.
    tracing::error!(
        message = "Could not run emo due to the following problem",
        error = ?report
    );

    report.wrap_err(ui_str::unrecoverable_error_msg())
}
