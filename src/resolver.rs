//! Secret resolution: process environment, then the nearest `.env`, then
//! nothing.
//!
//! A blank result is an error. Callers decide whether that aborts the
//! build; the resolver itself only reads and logs.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::MAPS_API_KEY;
use crate::dotenv;
use crate::env::Env;

/// Errors during key resolution.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(
        "{key} is empty. Set environment variable {key} or add {key}=... to a .env file in the project root."
    )]
    MissingSecret { key: String },

    #[error("failed to read env file {path}: {source}")]
    ReadEnvFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Process environment variable of the same name.
    Environment,
    /// A `NAME=value` line in this dotfile.
    DotEnv(PathBuf),
    /// Neither source had it.
    Default,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Environment => write!(f, "environment"),
            KeySource::DotEnv(path) => write!(f, "{}", path.display()),
            KeySource::Default => write!(f, "default"),
        }
    }
}

/// A non-blank secret plus its provenance.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub name: String,
    pub value: String,
    pub source: KeySource,
}

impl fmt::Debug for ResolvedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedKey")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .field("length", &self.value.chars().count())
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve `MAPS_API_KEY` for the module rooted at `start_dir`.
pub fn resolve_maps_api_key(start_dir: &Path, env: &Env) -> Result<ResolvedKey, ResolveError> {
    resolve_key(MAPS_API_KEY, start_dir, env)
}

/// Resolve the secret `name`.
///
/// Precedence: the environment variable `name` if set (even to the empty
/// string, in which case no file is read), else the first `name=` line of
/// the nearest `.env` at or above `start_dir`, else the empty string.
/// Blank results are rejected with [`ResolveError::MissingSecret`].
pub fn resolve_key(name: &str, start_dir: &Path, env: &Env) -> Result<ResolvedKey, ResolveError> {
    let (value, source) = match env.get(name) {
        Some(value) => (value, KeySource::Environment),
        None => match lookup_dotenv(name, start_dir)? {
            Some((value, path)) => (value, KeySource::DotEnv(path)),
            None => (String::new(), KeySource::Default),
        },
    };

    tracing::info!(
        key = name,
        length = value.chars().count(),
        source = %source,
        "resolved key"
    );

    if value.trim().is_empty() {
        return Err(ResolveError::MissingSecret {
            key: name.to_string(),
        });
    }

    Ok(ResolvedKey {
        name: name.to_string(),
        value,
        source,
    })
}

/// Read `name` from the nearest dotfile, if there is one and it has the key.
fn lookup_dotenv(name: &str, start_dir: &Path) -> Result<Option<(String, PathBuf)>, ResolveError> {
    let Some(path) = dotenv::find_env_file(start_dir) else {
        tracing::debug!(start = %start_dir.display(), "no env file found");
        return Ok(None);
    };

    let bytes = std::fs::read(&path).map_err(|e| ResolveError::ReadEnvFile {
        path: path.clone(),
        source: e,
    })?;

    // Undecodable bytes only spoil their own line.
    let contents = String::from_utf8_lossy(&bytes);

    Ok(dotenv::lookup(&contents, name).map(|value| (value, path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn module_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn environment_wins_over_dotenv() {
        let dir = module_dir();
        std::fs::write(dir.path().join(".env"), "MAPS_API_KEY=from-file\n").unwrap();
        let env = Env::mock([("MAPS_API_KEY", "from-env")]);

        let key = resolve_maps_api_key(dir.path(), &env).unwrap();
        assert_eq!(key.value, "from-env");
        assert_eq!(key.source, KeySource::Environment);
    }

    #[test]
    fn dotenv_in_start_dir() {
        let dir = module_dir();
        std::fs::write(dir.path().join(".env"), "MAPS_API_KEY=\"abc123\"\n").unwrap();

        let key = resolve_maps_api_key(dir.path(), &Env::empty()).unwrap();
        assert_eq!(key.value, "abc123");
        assert_eq!(key.source, KeySource::DotEnv(dir.path().join(".env")));
    }

    #[test]
    fn dotenv_in_parent_dir() {
        let dir = module_dir();
        let module = dir.path().join("android").join("app");
        std::fs::create_dir_all(&module).unwrap();
        std::fs::write(dir.path().join(".env"), "MAPS_API_KEY=xyz\n").unwrap();

        let key = resolve_maps_api_key(&module, &Env::empty()).unwrap();
        assert_eq!(key.value, "xyz");
    }

    #[test]
    fn empty_environment_value_skips_dotenv_and_fails() {
        let dir = module_dir();
        std::fs::write(dir.path().join(".env"), "MAPS_API_KEY=from-file\n").unwrap();
        let env = Env::mock([("MAPS_API_KEY", "")]);

        let err = resolve_maps_api_key(dir.path(), &env).unwrap_err();
        assert!(matches!(err, ResolveError::MissingSecret { ref key } if key == "MAPS_API_KEY"));
    }

    #[test]
    fn whitespace_only_environment_value_fails() {
        let dir = module_dir();
        let env = Env::mock([("MAPS_API_KEY", "   ")]);

        let err = resolve_maps_api_key(dir.path(), &env).unwrap_err();
        assert!(matches!(err, ResolveError::MissingSecret { .. }));
    }

    #[test]
    fn nearest_dotenv_without_key_does_not_fall_through_to_ancestors() {
        let dir = module_dir();
        let module = dir.path().join("app");
        std::fs::create_dir_all(&module).unwrap();
        std::fs::write(dir.path().join(".env"), "MAPS_API_KEY=outer\n").unwrap();
        std::fs::write(module.join(".env"), "UNRELATED=1\n").unwrap();

        let err = resolve_maps_api_key(&module, &Env::empty()).unwrap_err();
        assert!(matches!(err, ResolveError::MissingSecret { .. }));
    }

    #[test]
    fn quoted_empty_value_fails() {
        let dir = module_dir();
        std::fs::write(dir.path().join(".env"), "MAPS_API_KEY=\"\"\n").unwrap();

        let err = resolve_maps_api_key(dir.path(), &Env::empty()).unwrap_err();
        assert!(matches!(err, ResolveError::MissingSecret { .. }));
    }

    #[test]
    fn resolves_other_key_names() {
        let dir = module_dir();
        std::fs::write(dir.path().join(".env"), "MAPS_API_KEY=a\nPLACES_KEY=b\n").unwrap();

        let key = resolve_key("PLACES_KEY", dir.path(), &Env::empty()).unwrap();
        assert_eq!(key.name, "PLACES_KEY");
        assert_eq!(key.value, "b");
    }

    #[test]
    fn missing_secret_message_names_both_sources() {
        let err = ResolveError::MissingSecret {
            key: "MAPS_API_KEY".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Set environment variable MAPS_API_KEY"));
        assert!(msg.contains("MAPS_API_KEY=... to a .env file"));
    }

    #[test]
    fn debug_output_redacts_value() {
        let key = ResolvedKey {
            name: "MAPS_API_KEY".into(),
            value: "super-secret".into(),
            source: KeySource::Environment,
        };
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("12"));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_dotenv_is_reported() {
        let dir = module_dir();
        // A directory named `.env` exists but cannot be read as a file.
        std::fs::create_dir(dir.path().join(".env")).unwrap();

        let err = resolve_maps_api_key(dir.path(), &Env::empty()).unwrap_err();
        assert!(matches!(err, ResolveError::ReadEnvFile { .. }));
        assert!(err.to_string().contains("failed to read env file"));
    }

    #[test]
    fn invalid_utf8_line_does_not_hide_key() {
        let dir = module_dir();
        std::fs::write(dir.path().join(".env"), b"# caf\xE9\nMAPS_API_KEY=abc123\n").unwrap();

        let key = resolve_maps_api_key(dir.path(), &Env::empty()).unwrap();
        assert_eq!(key.value, "abc123");
    }

    #[test]
    fn carriage_return_only_dotenv() {
        let dir = module_dir();
        std::fs::write(dir.path().join(".env"), "A=1\rMAPS_API_KEY=x\r").unwrap();

        let key = resolve_maps_api_key(dir.path(), &Env::empty()).unwrap();
        assert_eq!(key.value, "x");
    }

    /// Shared buffer the fmt subscriber writes log lines into.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn resolve_capturing(env: &Env, dir: &Path) -> (Result<ResolvedKey, ResolveError>, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        let result =
            tracing::subscriber::with_default(subscriber, || resolve_maps_api_key(dir, env));
        (result, logs.contents())
    }

    #[test]
    fn logs_length_but_not_value() {
        let dir = module_dir();
        let env = Env::mock([("MAPS_API_KEY", "super-secret")]);

        let (result, logs) = resolve_capturing(&env, dir.path());
        assert!(result.is_ok());
        assert!(logs.contains("resolved key"), "logs: {logs}");
        assert!(logs.contains("length=12"), "logs: {logs}");
        assert!(!logs.contains("super-secret"), "logs: {logs}");
    }

    #[test]
    fn logged_length_counts_characters() {
        let dir = module_dir();
        let env = Env::mock([("MAPS_API_KEY", "ключ")]);

        let (result, logs) = resolve_capturing(&env, dir.path());
        assert_eq!(result.unwrap().value, "ключ");
        assert!(logs.contains("length=4"), "logs: {logs}");
    }

    #[test]
    fn blank_key_is_logged_before_failing() {
        let dir = module_dir();
        let env = Env::mock([("MAPS_API_KEY", "")]);

        let (result, logs) = resolve_capturing(&env, dir.path());
        assert!(matches!(result, Err(ResolveError::MissingSecret { .. })));
        assert!(logs.contains("length=0"), "logs: {logs}");
    }
}
