// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::OnceLock;

use super::{Catalog, CatalogConfig};
use crate::CatalogError;

/// Built at most once per process, then only ever read.
static GLOBAL_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Build the process wide catalog with `config`. Call this once, early (eg: in `main`),
/// if the default [`CatalogConfig`] isn't what you want. Calling it again with the same
/// config is harmless and returns the existing catalog.
///
/// # Errors
///
/// - [`CatalogError::GlobalAlreadyInitialized`] if the global catalog already exists and
///   was built with a different config (possibly implicitly, via [`global_catalog`]).
/// - Any error from [`Catalog::bundled`].
pub fn try_init_global_catalog(
    config: CatalogConfig,
) -> Result<&'static Catalog, CatalogError> {
    let it = match GLOBAL_CATALOG.get() {
        Some(it) => it,
        None => {
            let catalog = Catalog::bundled(config)?;
            // Another thread may win the race, then its catalog is the one that sticks.
            GLOBAL_CATALOG.get_or_init(move || catalog)
        }
    };

    if it.config() == config {
        Ok(it)
    } else {
        Err(CatalogError::GlobalAlreadyInitialized)
    }
}

/// The process wide catalog. It is built on first use with [`CatalogConfig::default`],
/// unless [`try_init_global_catalog`] ran before.
///
/// # Panics
///
/// If the bundled data is malformed. A corrupt catalog is never served, and this can
/// only happen if the static tables in this crate are broken, which the unit tests
/// catch.
pub fn global_catalog() -> &'static Catalog {
    GLOBAL_CATALOG.get_or_init(|| match Catalog::bundled(CatalogConfig::default()) {
        Ok(it) => it,
        Err(error) => panic!("{:?}", miette::Report::new(error)),
    })
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::assert_eq2;

    #[serial]
    #[test]
    fn test_global_catalog_is_built_once() {
        let first = global_catalog();
        let second = global_catalog();
        assert!(std::ptr::eq(first, second));
        assert_eq2!(first.config(), CatalogConfig::default());
    }

    #[serial]
    #[test]
    fn test_try_init_after_implicit_init() {
        let implicit = global_catalog();

        let same = try_init_global_catalog(CatalogConfig::default()).unwrap();
        assert!(std::ptr::eq(implicit, same));

        let result = try_init_global_catalog(CatalogConfig {
            bare_legacy_symbols: true,
            ..Default::default()
        });
        assert_eq2!(result.unwrap_err(), CatalogError::GlobalAlreadyInitialized);
    }
}
