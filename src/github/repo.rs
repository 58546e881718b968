use std::fmt;
use std::str::FromStr;

/// Repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Invalid repository format. Please use <owner>/<repo>.")]
pub struct InvalidRepo;

impl FromStr for RepoId {
    type Err = InvalidRepo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            Ok(RepoId {
                owner: parts[0].to_string(),
                name: parts[1].to_string(),
            })
        } else {
            Err(InvalidRepo)
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
