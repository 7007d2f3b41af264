use super::types::FileMap;

/// Base files every generated React project must ship.
pub const DEFAULT_REQUIRED_FILES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "vite.config.ts",
    "index.html",
    "src/main.tsx",
    "src/App.tsx",
];

/// Which extracted files are streamed back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FileSelection {
    /// Every file, in the order the agent produced them
    #[default]
    All,
    /// Only the listed paths, in list order, skipping paths the agent omitted
    Required(Vec<String>),
}

impl FileSelection {
    pub fn required_defaults() -> Self {
        Self::Required(
            DEFAULT_REQUIRED_FILES
                .iter()
                .map(|path| path.to_string())
                .collect(),
        )
    }
}

/// Order and filter extracted files for streaming.
///
/// Each path is returned at most once, even if the required list repeats it.
pub fn select_files(mut files: FileMap, selection: &FileSelection) -> Vec<(String, String)> {
    match selection {
        FileSelection::All => files.into_iter().collect(),
        FileSelection::Required(paths) => paths
            .iter()
            .filter_map(|path| files.remove(path).map(|content| (path.clone(), content)))
            .collect(),
    }
}
