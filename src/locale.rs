//! Maps `.lproj` bundles onto Android `values` resource directories.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::Error,
    options::SourceFiles,
    types::{DEFAULT_LOCALE, LOCALIZABLE_STRINGS, LocaleEntry},
};

const STRINGS_EXTENSION: &str = "strings";

/// Portion of a bundle directory name before the first `.`.
///
/// ```rust
/// assert_eq!(strings2android::locale::locale_code("pt-BR.lproj"), "pt-BR");
/// ```
pub fn locale_code(directory_name: &str) -> &str {
    directory_name
        .split_once('.')
        .map_or(directory_name, |(code, _)| code)
}

/// `values` for English, `values-<locale>` for everything else.
pub fn output_directory_name(locale_code: &str) -> String {
    if locale_code == DEFAULT_LOCALE {
        "values".to_string()
    } else {
        format!("values-{}", locale_code)
    }
}

/// Lists every `.lproj` directory directly below `root`, sorted by name.
///
/// Fails with [`Error::DirectoryAccess`] when `root` cannot be listed.
pub fn discover_locales<P: AsRef<Path>>(root: P) -> Result<Vec<LocaleEntry>, Error> {
    let root = root.as_ref();
    let mut locales = Vec::new();
    for child in fs::read_dir(root).map_err(|e| Error::directory_access(root, e))? {
        let child = child.map_err(|e| Error::directory_access(root, e))?;
        let name = child.file_name().to_string_lossy().into_owned();
        let Some(entry) = LocaleEntry::from_directory_name(&name) else {
            continue;
        };
        if child.path().is_dir() {
            locales.push(entry);
        }
    }
    locales.sort_by(|a, b| a.source_directory_name.cmp(&b.source_directory_name));
    Ok(locales)
}

/// Creates the output directory for `locale` under `res_dir` if it is missing.
pub fn ensure_output_directory(res_dir: &Path, locale: &LocaleEntry) -> Result<PathBuf, Error> {
    let dir = res_dir.join(&locale.output_directory_name);
    fs::create_dir_all(&dir).map_err(|e| Error::file_access(&dir, e))?;
    Ok(dir)
}

/// Source files in one bundle directory, sorted by name.
pub fn source_files(locale_dir: &Path, selection: SourceFiles) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for child in fs::read_dir(locale_dir).map_err(|e| Error::file_access(locale_dir, e))? {
        let path = child.map_err(|e| Error::file_access(locale_dir, e))?.path();
        if !path.is_file() || !is_selected(&path, selection) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

fn is_selected(path: &Path, selection: SourceFiles) -> bool {
    match selection {
        SourceFiles::All => path
            .extension()
            .is_some_and(|ext| ext == STRINGS_EXTENSION),
        SourceFiles::LocalizableOnly => path
            .file_name()
            .is_some_and(|name| name == LOCALIZABLE_STRINGS),
    }
}
