// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand};
use r3bl_emoji::CatalogConfig;

#[derive(Debug, Parser)]
#[command(bin_name = "emo")]
#[command(about = "🔎 Find, filter, replace, and measure emoji in text ✨")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  emo [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        help = "Treat legacy symbols that default to text presentation (eg: ⚡) as emoji, even without U+FE0F"
    )]
    pub bare_legacy_symbols: bool,

    #[arg(
        global = true,
        long,
        help = "Don't extend a match over a U+FE0F that follows a complete sequence"
    )]
    pub no_absorb_trailing_selector: bool,
}

impl From<&GlobalOption> for CatalogConfig {
    fn from(global_options: &GlobalOption) -> Self {
        Self {
            bare_legacy_symbols: global_options.bare_legacy_symbols,
            absorb_trailing_selector: !global_options.no_absorb_trailing_selector,
            ..CatalogConfig::default()
        }
    }
}

/// Text to work on. When no words are given, stdin is read instead.
#[derive(Debug, Args)]
pub struct InputArg {
    #[arg(value_name = "TEXT", help = "Text to scan, joined with spaces. Reads stdin if absent")]
    pub words: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "❓ Print `true` if the text holds an emoji, `false` otherwise\n💡 Eg: `emo has \"hi 👋\"`")]
    Has {
        #[command(flatten)]
        input: InputArg,
    },

    #[clap(about = "🧹 Print the text with every emoji removed\n💡 Eg: `emo filter \"1️⃣23\"`")]
    Filter {
        #[command(flatten)]
        input: InputArg,
    },

    #[clap(about = "🔁 Print the text with every emoji replaced\n💡 Eg: `emo replace --with \"#\" \"1️⃣23\"`")]
    Replace {
        #[arg(long, short = 'w', default_value = "", help = "Replacement for each emoji")]
        with: String,

        #[command(flatten)]
        input: InputArg,
    },

    #[clap(about = "📏 Print the number of glyphs, counting each emoji as one\n💡 Eg: `emo len \"👩‍👩‍👦🇨🇳3\"`")]
    Len {
        #[command(flatten)]
        input: InputArg,
    },

    #[clap(about = "🔬 Print one line per span (plain run or emoji) of the text\n💡 Eg: `emo dump \"👨‍👩‍👧‍👦123\"`")]
    Dump {
        #[command(flatten)]
        input: InputArg,
    },

    #[clap(about = "📚 Print the number of catalog entries for each sequence kind")]
    Catalog {},
}

impl CLICommand {
    /// The text arguments of this command, if it takes any.
    #[must_use]
    pub fn input(&self) -> Option<&InputArg> {
        match self {
            CLICommand::Has { input }
            | CLICommand::Filter { input }
            | CLICommand::Replace { input, .. }
            | CLICommand::Len { input }
            | CLICommand::Dump { input } => Some(input),
            CLICommand::Catalog {} => None,
        }
    }
}
