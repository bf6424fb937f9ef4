// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;

use super::TracingConfig;
use crate::ok;

/// Global subscriber for the whole process. Call it once, early in `main`.
///
/// Logging is **disabled** by default. Nothing this crate logs (catalog construction at
/// info level, each [`crate::Catalog::dump`] line at debug level) goes anywhere until
/// this or [`try_initialize_logging_thread_local`] is called with a level other than
/// [`LevelFilter::OFF`].
///
/// ```no_run
/// use r3bl_emoji::{DisplayPreference, TracingConfig, try_initialize_logging_global};
/// use tracing_core::LevelFilter;
///
/// let config = TracingConfig::from(LevelFilter::DEBUG)
///     + TracingConfig::from(DisplayPreference::Stderr);
/// try_initialize_logging_global(config).unwrap();
/// ```
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    it.install_global()
}

/// Subscriber for the current thread, until the returned guard drops. Returns `None`
/// when the level is [`LevelFilter::OFF`].
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WriterConfig, assert_eq2};

    #[test]
    fn test_off_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("off.log");

        let guard = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::File(file_path.to_string_lossy().into_owned()),
            level_filter: LevelFilter::OFF,
        })
        .unwrap();

        assert!(guard.is_none());
        assert!(!file_path.exists());
        assert_eq2!(try_initialize_logging_global(LevelFilter::OFF).is_ok(), true);
    }

    #[test]
    fn test_thread_local_level_filters_debug_events() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("info.log");

        let guard = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::File(file_path.to_string_lossy().into_owned()),
            level_filter: LevelFilter::INFO,
        })
        .unwrap();
        assert!(guard.is_some());

        let catalog = crate::Catalog::bundled(crate::CatalogConfig::default()).unwrap();
        let _unused = catalog.dump("😀");
        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("Emoji catalog built"), "{contents}");
        assert!(!contents.contains("Emoji scan"), "{contents}");
    }
}
