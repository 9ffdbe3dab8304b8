use serde::Serialize;

/// Version and source-control metadata captured by the build script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub library_version: &'static str,
    pub docs_version: &'static str,
    pub commit_hash: &'static str,
    pub commit_date: &'static str,
    pub branch: &'static str,
    pub build_date: &'static str,
}

pub const BUILD_INFO: BuildInfo = BuildInfo {
    library_version: env!("KUMO_LIBRARY_VERSION"),
    docs_version: env!("KUMO_DOCS_VERSION"),
    commit_hash: env!("KUMO_COMMIT_HASH"),
    commit_date: env!("KUMO_COMMIT_DATE"),
    branch: env!("KUMO_BRANCH"),
    build_date: env!("KUMO_BUILD_DATE"),
};
