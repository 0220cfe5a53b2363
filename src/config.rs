use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use url::Url;

/// The project file name searched for by [`Config::from_directory`].
pub const PROJECT_FILE: &str = "adr-index.yaml";

const DEFAULT_REPO_URL: &str =
    "https://github.com/pleo-io/architectural-decision-records/blob/main";
const DEFAULT_ADR_DIRECTORY: &str = "doc/adr";
const DEFAULT_TAGS_DIRECTORY: &str = "tags";
const DEFAULT_INDEX_FILE: &str = "README.md";
const DEFAULT_TITLE: &str = "Architectural Decision Records (ADRs)";
const DEFAULT_CONTRIBUTING: &str =
    "Please read [CONTRIBUTING.md](CONTRIBUTING.md) for guidelines on how to add an ADR.";

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Project {
    repo_url: Option<Url>,
    adr_directory: String,
    tags_directory: String,
    index_file: String,
    title: String,
    contributing: String,
}

impl Default for Project {
    fn default() -> Self {
        Project {
            repo_url: None,
            adr_directory: DEFAULT_ADR_DIRECTORY.to_owned(),
            tags_directory: DEFAULT_TAGS_DIRECTORY.to_owned(),
            index_file: DEFAULT_INDEX_FILE.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            contributing: DEFAULT_CONTRIBUTING.to_owned(),
        }
    }
}

/// Every path and URL a run needs. Relative directories from the project file
/// are resolved against `root_directory` for disk access and against the
/// repository URL for links.
#[derive(Clone, Debug)]
pub struct Config {
    pub root_directory: PathBuf,
    pub adr_directory: PathBuf,
    pub index_file: PathBuf,
    pub tags_directory: PathBuf,
    pub documents_url: Url,
    pub tags_url: Url,
    pub title: String,
    pub contributing: String,
}

impl Config {
    /// Searches `dir` and its ancestors for [`PROJECT_FILE`]. The first match
    /// is loaded via [`Config::from_project_file`]; if there's none, the
    /// defaults are used with `dir` as the repository root.
    pub fn from_directory(dir: &Path, repo_url: Option<Url>) -> Result<Config> {
        for candidate in dir.ancestors() {
            let path = candidate.join(PROJECT_FILE);
            if path.is_file() {
                return Config::from_project_file(&path, repo_url);
            }
        }
        Config::defaults(dir, repo_url)
    }

    /// Loads a project file. The directory containing it is the repository
    /// root. `repo_url`, if provided, overrides the file's `repo_url`.
    pub fn from_project_file(path: &Path, repo_url: Option<Url>) -> Result<Config> {
        let file = File::open(path)
            .with_context(|| format!("Opening project file `{}`", path.display()))?;
        let project: Project = serde_yaml::from_reader(file)
            .with_context(|| format!("Loading project file `{}`", path.display()))?;
        match path.parent() {
            None => Err(anyhow!(
                "Can't get parent directory for provided project file path '{:?}'",
                path
            )),
            Some(root) => Config::from_project(root, project, repo_url),
        }
    }

    /// The configuration used when there's no project file.
    pub fn defaults(root: &Path, repo_url: Option<Url>) -> Result<Config> {
        Config::from_project(root, Project::default(), repo_url)
    }

    fn from_project(root: &Path, project: Project, repo_url: Option<Url>) -> Result<Config> {
        let repo_url = match repo_url.or(project.repo_url) {
            Some(url) => url,
            None => Url::parse(DEFAULT_REPO_URL)?,
        };
        let repo_url = with_trailing_slash(repo_url);
        Ok(Config {
            root_directory: root.to_owned(),
            adr_directory: root.join(&project.adr_directory),
            index_file: root.join(&project.index_file),
            tags_directory: root.join(&project.tags_directory),
            documents_url: directory_url(&repo_url, &project.adr_directory)?,
            tags_url: directory_url(&repo_url, &project.tags_directory)?,
            title: project.title,
            contributing: project.contributing,
        })
    }
}

// `Url::join` treats the last path segment as a file name unless it's
// followed by a slash.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn directory_url(repo_url: &Url, dir: &str) -> Result<Url> {
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        return Ok(repo_url.clone());
    }
    repo_url
        .join(&format!("./{}/", dir))
        .with_context(|| format!("Joining `{}` onto `{}`", dir, repo_url))
}
