//! Catalog selection for the CLI.
//!
//! The binary takes the path from `--catalog` or `LINEUP_CATALOG_PATH`
//! (clap reads both); without either the catalog embedded in
//! `lineup_core` is used.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use lineup_core::data::{default_catalog, Catalog};
use tracing::debug;

/// Load the catalog file at `path`, or borrow the embedded one.
///
/// A blank path counts as none.
pub fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, Catalog>> {
    match path.filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty()) {
        Some(path) => {
            let catalog = Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
            Ok(Cow::Owned(catalog))
        }
        None => {
            debug!("using embedded catalog");
            Ok(Cow::Borrowed(default_catalog()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_when_no_path() {
        let catalog = load_catalog(None).unwrap();
        assert!(matches!(catalog, Cow::Borrowed(_)));
        assert!(catalog.hero("Axe").is_some());

        let catalog = load_catalog(Some(Path::new(" "))).unwrap();
        assert!(matches!(catalog, Cow::Borrowed(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"lastPatch":"2019/03/01","heroes":[{{"name":"Mirana","species":["Elf"],"className":"Hunter","cost":3}}],"perks":[]}}"#
        )
        .unwrap();

        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.heroes().len(), 1);
        assert_eq!(catalog.last_patch(), "2019/03/01");
    }

    #[test]
    fn test_bad_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_catalog(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load catalog"));
    }
}
