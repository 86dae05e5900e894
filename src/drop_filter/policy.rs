use serde::{Deserialize, Serialize};

use super::payload::DragPayloadItem;

/// Rules deciding which dragged items the embedding application can use.
///
/// Extensions are stored normalized (trimmed, lowercase, no leading dot) and
/// deduplicated in the order they were first configured, so the prompt text
/// reads the way the application listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PolicySettings", into = "PolicySettings")]
pub struct AcceptancePolicy {
    allowed_extensions: Vec<String>,
    accept_directories: bool,
}

/// On-disk shape of an [`AcceptancePolicy`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PolicySettings {
    #[serde(default)]
    allowed_extensions: Vec<String>,
    #[serde(default)]
    accept_directories: bool,
}

impl From<PolicySettings> for AcceptancePolicy {
    fn from(settings: PolicySettings) -> Self {
        Self::new(settings.allowed_extensions).with_directories(settings.accept_directories)
    }
}

impl From<AcceptancePolicy> for PolicySettings {
    fn from(policy: AcceptancePolicy) -> Self {
        Self {
            allowed_extensions: policy.allowed_extensions,
            accept_directories: policy.accept_directories,
        }
    }
}

impl AcceptancePolicy {
    /// Policy accepting files with any of `extensions`; directories are rejected.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut policy = Self::default();
        policy.set_allowed_extensions(extensions);
        policy
    }

    pub fn with_directories(mut self, accept: bool) -> Self {
        self.accept_directories = accept;
        self
    }

    pub fn set_allowed_extensions<I, S>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions.clear();
        for ext in extensions {
            let Some(ext) = normalize_extension(ext.as_ref()) else {
                continue;
            };
            if !self.allowed_extensions.contains(&ext) {
                self.allowed_extensions.push(ext);
            }
        }
    }

    pub fn set_accepts_directories(&mut self, accept: bool) {
        self.accept_directories = accept;
    }

    pub fn allowed_extensions(&self) -> impl Iterator<Item = &str> {
        self.allowed_extensions.iter().map(String::as_str)
    }

    pub fn accepts_directories(&self) -> bool {
        self.accept_directories
    }

    /// Case-insensitive membership test for a candidate extension.
    pub fn allows_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.allowed_extensions.iter().any(|allowed| *allowed == ext)
    }

    /// Directories pass iff directories are accepted; files pass on extension alone.
    pub fn accepts(&self, item: &DragPayloadItem) -> bool {
        if item.is_directory {
            self.accept_directories
        } else {
            self.allows_extension(&item.extension())
        }
    }

    /// Extensions joined with `/`, e.g. `csv/xlsx`.
    pub fn describe_extensions(&self) -> String {
        self.allowed_extensions.join("/")
    }
}

fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim().trim_start_matches('.').to_lowercase();
    (!ext.is_empty()).then_some(ext)
}
