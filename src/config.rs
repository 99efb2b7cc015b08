use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Returns the default already-bumped marker text.
fn default_commit_message() -> String {
    "version bump".to_string()
}

/// Returns the default descriptor file path.
fn default_descriptor_file() -> String {
    "pom.xml".to_string()
}

/// Returns the default bump command template.
fn default_bump_command() -> String {
    "mvn org.codehaus.mojo:versions-maven-plugin:set -DnewVersion=@NEW_VERSION@".to_string()
}

/// Returns the default path to the version field inside the descriptor.
fn default_version_path() -> String {
    "/project/version".to_string()
}

fn default_user_name() -> String {
    "Automated Version Bump".to_string()
}

fn default_user_email() -> String {
    "git-version-bump@users.noreply.github.com".to_string()
}

/// Represents the complete configuration for a bump run.
///
/// Constructed once at process start from an optional TOML file plus the
/// GitHub Actions environment; the workflow never reads the environment again
/// after this point.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Marker text identifying commits that already are version bumps.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Prefix prepended to the created tag (e.g. "v").
    #[serde(default)]
    pub tag_prefix: String,

    /// Build descriptor file holding the current version.
    #[serde(default = "default_descriptor_file")]
    pub descriptor_file: String,

    /// Command template applying the new version to the descriptor.
    /// `@OLD_VERSION@` and `@NEW_VERSION@` are substituted before execution.
    #[serde(default = "default_bump_command")]
    pub bump_command: String,

    /// Slash-delimited path to the version field inside the descriptor.
    #[serde(default = "default_version_path")]
    pub version_path: String,

    /// Explicit version override; empty means "compute from commits".
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub git: GitConfig,

    /// Push credentials, only ever populated from the environment.
    #[serde(skip)]
    pub push: PushConfig,
}

/// Identity used for the version-bump commit.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_user_name")]
    pub user_name: String,

    #[serde(default = "default_user_email")]
    pub user_email: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            user_name: default_user_name(),
            user_email: default_user_email(),
        }
    }
}

/// Credentials and coordinates for pushing back to the remote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PushConfig {
    pub actor: String,
    pub token: String,
    pub repository: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            commit_message: default_commit_message(),
            tag_prefix: String::new(),
            descriptor_file: default_descriptor_file(),
            bump_command: default_bump_command(),
            version_path: default_version_path(),
            version: String::new(),
            git: GitConfig::default(),
            push: PushConfig::default(),
        }
    }
}

impl Config {
    /// Splits the configured version path into its non-empty segments.
    ///
    /// "/project/version" -> ["project", "version"]
    pub fn version_path_segments(&self) -> Vec<&str> {
        self.version_path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Overlays GitHub Actions environment variables onto this configuration.
    ///
    /// Environment values always win over file-provided values. Action input
    /// names use the `INPUT_` prefix with the hyphenated input name, matching
    /// how the Actions runtime exposes them.
    pub fn apply_env(&mut self) {
        override_from_env(&mut self.commit_message, "INPUT_COMMIT-MESSAGE");
        override_from_env(&mut self.tag_prefix, "INPUT_TAG-PREFIX");
        override_from_env(&mut self.descriptor_file, "INPUT_POM-FILE");
        override_from_env(&mut self.bump_command, "INPUT_BUMP-COMMAND");
        override_from_env(&mut self.version_path, "INPUT_VERSION-PATH");
        override_from_env(&mut self.version, "INPUT_VERSION");
        override_from_env(&mut self.git.user_name, "GITHUB_USER");
        override_from_env(&mut self.git.user_email, "GITHUB_EMAIL");
        override_from_env(&mut self.push.actor, "GITHUB_ACTOR");
        override_from_env(&mut self.push.token, "GITHUB_TOKEN");
        override_from_env(&mut self.push.repository, "GITHUB_REPOSITORY");
    }
}

fn override_from_env(field: &mut String, key: &str) {
    if let Ok(value) = env::var(key) {
        *field = value;
    }
}

/// Loads configuration from file, environment, or defaults.
///
/// File values are resolved in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitversionbump.toml` in current directory
/// 3. `.gitversionbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// Environment variables are applied on top of whichever source was used.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded configuration with environment overrides applied
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        Some(fs::read_to_string(path)?)
    } else if Path::new("./gitversionbump.toml").exists() {
        Some(fs::read_to_string("./gitversionbump.toml")?)
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitversionbump.toml");
        if config_path.exists() {
            Some(fs::read_to_string(config_path)?)
        } else {
            None
        }
    } else {
        None
    };

    let mut config: Config = match config_str {
        Some(s) => toml::from_str(&s)?,
        None => Config::default(),
    };

    config.apply_env();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.commit_message, "version bump");
        assert_eq!(config.tag_prefix, "");
        assert_eq!(config.descriptor_file, "pom.xml");
        assert_eq!(config.version_path, "/project/version");
        assert_eq!(config.version, "");
        assert!(config.bump_command.contains("@NEW_VERSION@"));
    }

    #[test]
    fn test_default_git_identity() {
        let config = Config::default();
        assert_eq!(config.git.user_name, "Automated Version Bump");
        assert!(config.git.user_email.contains("users.noreply.github.com"));
    }

    #[test]
    fn test_version_path_segments() {
        let config = Config::default();
        assert_eq!(config.version_path_segments(), vec!["project", "version"]);
    }

    #[test]
    fn test_version_path_segments_skip_empty() {
        let config = Config {
            version_path: "//project//version/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.version_path_segments(), vec!["project", "version"]);
    }

    #[test]
    fn test_parse_from_toml() {
        let toml_content = r#"
commit_message = "release"
tag_prefix = "v"
descriptor_file = "package.json"
version_path = "/version"

[git]
user_name = "CI Bot"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.commit_message, "release");
        assert_eq!(config.tag_prefix, "v");
        assert_eq!(config.descriptor_file, "package.json");
        assert_eq!(config.version_path_segments(), vec!["version"]);
        assert_eq!(config.git.user_name, "CI Bot");
        // Unspecified fields keep their defaults
        assert!(config.git.user_email.contains("users.noreply.github.com"));
        assert!(config.bump_command.starts_with("mvn"));
    }
}
