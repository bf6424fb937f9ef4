// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::try_create_layers;

/// Log file used when only a level is given, eg: `LevelFilter::DEBUG.into()`.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where logs go, and how verbose they are.
///
/// Anything that converts into a `TracingConfig` can be handed to
/// [`super::try_initialize_logging_global`], and configs compose with `+`:
///
/// ```
/// use r3bl_emoji::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let it: TracingConfig = LevelFilter::INFO.into();
/// let it = it + TracingConfig::from(DisplayPreference::Stderr);
/// assert_eq!(
///     it.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".into())
/// );
/// assert_eq!(it.level_filter, LevelFilter::DEBUG);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Set the global default subscriber. This can only happen once per process, which
    /// is what a binary wants.
    ///
    /// # Errors
    ///
    /// If a layer can't be created (eg: the log file folder isn't accessible), or a
    /// global subscriber is already set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("Can't set global tracing subscriber: {err}"))
    }

    /// Set a subscriber for the current thread only, until the returned guard is dropped.
    /// This is what tests want.
    ///
    /// # Errors
    ///
    /// If a layer can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(display_preference: DisplayPreference) -> Self {
        WriterConfig::Display(display_preference).into()
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level wins, and writer configs merge.
impl Add for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Display and file settings combine. When both sides set the same thing, `rhs` wins.
impl Add for WriterConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, it) | (it, None) => it,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
            (_, DisplayAndFile(display, file)) => DisplayAndFile(display, file),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn file(name: &str) -> WriterConfig { WriterConfig::File(name.into()) }

    fn both(display: DisplayPreference, name: &str) -> WriterConfig {
        WriterConfig::DisplayAndFile(display, name.into())
    }

    #[test_case(WriterConfig::None, WriterConfig::None, WriterConfig::None ; "none none")]
    #[test_case(WriterConfig::None, file("a"), file("a") ; "none file")]
    #[test_case(file("a"), WriterConfig::None, file("a") ; "file none")]
    #[test_case(file("a"), file("b"), file("b") ; "file file")]
    #[test_case(
        WriterConfig::Display(DisplayPreference::Stdout), file("a"),
        both(DisplayPreference::Stdout, "a") ; "display file"
    )]
    #[test_case(
        file("a"), WriterConfig::Display(DisplayPreference::Stderr),
        both(DisplayPreference::Stderr, "a") ; "file display"
    )]
    #[test_case(
        both(DisplayPreference::Stdout, "a"), WriterConfig::Display(DisplayPreference::Stderr),
        both(DisplayPreference::Stderr, "a") ; "both display"
    )]
    #[test_case(
        both(DisplayPreference::Stdout, "a"), file("b"),
        both(DisplayPreference::Stdout, "b") ; "both file"
    )]
    #[test_case(
        file("a"), both(DisplayPreference::Stderr, "b"),
        both(DisplayPreference::Stderr, "b") ; "file both"
    )]
    fn test_add_writer_configs(lhs: WriterConfig, rhs: WriterConfig, expected: WriterConfig) {
        assert_eq2!(lhs + rhs, expected);
    }

    #[test]
    fn test_conversions() {
        let it: TracingConfig = tracing::Level::INFO.into();
        assert_eq2!(it.get_level_filter(), LevelFilter::INFO);
        assert_eq2!(it.get_writer_config(), file(DEFAULT_LOG_FILE_NAME));

        let it: TracingConfig = DisplayPreference::Stdout.into();
        assert_eq2!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq2!(
            it.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stdout)
        );
    }
}
