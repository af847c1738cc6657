use anyhow::{anyhow, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub namespace: String,
}

/// Trait for abstracting environment variable access
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation using std::env
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock implementation for testing
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn load_config() -> Result<Config> {
    load_config_with(std::env::args().skip(1), &SystemEnvironment)
}

/// The namespace comes from the first positional argument when given,
/// otherwise from the NAMESPACE environment variable.
pub fn load_config_with<I, E>(args: I, env: &E) -> Result<Config>
where
    I: IntoIterator<Item = String>,
    E: EnvironmentProvider,
{
    let namespace = args
        .into_iter()
        .next()
        .or_else(|| env.get_var("NAMESPACE"))
        .map(|ns| ns.trim().to_string())
        .filter(|ns| !ns.is_empty())
        .ok_or_else(|| {
            anyhow!("namespace required: pass it as the first argument or set NAMESPACE")
        })?;

    Ok(Config { namespace })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_from_argument() {
        let env = MockEnvironment::new();
        let config = load_config_with(vec!["staging".to_string()], &env).unwrap();
        assert_eq!(config.namespace, "staging");
    }

    #[test]
    fn test_namespace_from_env_when_no_argument() {
        let env = MockEnvironment::new().with_var("NAMESPACE", "prod");
        let config = load_config_with(Vec::new(), &env).unwrap();
        assert_eq!(config.namespace, "prod");
    }

    #[test]
    fn test_argument_takes_precedence_over_env() {
        let env = MockEnvironment::new().with_var("NAMESPACE", "prod");
        let config = load_config_with(vec!["staging".to_string()], &env).unwrap();
        assert_eq!(config.namespace, "staging");
    }

    #[test]
    fn test_namespace_is_trimmed() {
        let env = MockEnvironment::new().with_var("NAMESPACE", "  demo \n");
        let config = load_config_with(Vec::new(), &env).unwrap();
        assert_eq!(config.namespace, "demo");
    }

    #[test]
    fn test_missing_namespace_is_an_error() {
        let env = MockEnvironment::new();
        let result = load_config_with(Vec::new(), &env);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("NAMESPACE"));
    }

    #[test]
    fn test_blank_namespace_is_an_error() {
        let env = MockEnvironment::new().with_var("NAMESPACE", "   ");
        assert!(load_config_with(Vec::new(), &env).is_err());

        let env = MockEnvironment::new();
        assert!(load_config_with(vec!["  ".to_string()], &env).is_err());
    }
}
