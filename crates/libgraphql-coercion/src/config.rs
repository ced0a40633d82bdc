use crate::arguments::ArgumentsCoercer;
use crate::arguments::ConcurrentArgumentsCoercer;
use crate::arguments::SequentialArgumentsCoercer;
use std::sync::Arc;
use thiserror::Error;

/// The environment variable [`CoercionConfig::from_env()`] reads the
/// arguments coercion policy from.
pub const ARGUMENTS_COERCER_ENV_VAR: &str = "LIBGRAPHQL_ARGUMENTS_COERCER";

/// The built-in policies for driving the argument coercions of a field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgumentsCoercerKind {
    #[default]
    Concurrent,
    ConcurrentFailFast,
    Sequential,
    SequentialFailFast,
}
impl ArgumentsCoercerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concurrent => "concurrent",
            Self::ConcurrentFailFast => "concurrent-fail-fast",
            Self::Sequential => "sequential",
            Self::SequentialFailFast => "sequential-fail-fast",
        }
    }

    pub fn to_arguments_coercer(self) -> Arc<dyn ArgumentsCoercer> {
        match self {
            Self::Concurrent =>
                Arc::new(ConcurrentArgumentsCoercer { fail_fast: false }),
            Self::ConcurrentFailFast =>
                Arc::new(ConcurrentArgumentsCoercer { fail_fast: true }),
            Self::Sequential =>
                Arc::new(SequentialArgumentsCoercer { fail_fast: false }),
            Self::SequentialFailFast =>
                Arc::new(SequentialArgumentsCoercer { fail_fast: true }),
        }
    }
}
impl std::fmt::Display for ArgumentsCoercerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl std::str::FromStr for ArgumentsCoercerKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(Self::Concurrent),
            "concurrent-fail-fast" => Ok(Self::ConcurrentFailFast),
            "sequential" => Ok(Self::Sequential),
            "sequential-fail-fast" => Ok(Self::SequentialFailFast),
            _ => Err(ConfigError::InvalidArgumentsCoercer {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(
        "Invalid arguments coercer `{value}`: expected one of `concurrent`, \
        `concurrent-fail-fast`, `sequential`, or `sequential-fail-fast`"
    )]
    InvalidArgumentsCoercer {
        value: String,
    },
}

/// Engine-wide coercion settings.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CoercionConfig {
    /// The policy used for fields without a per-field override.
    pub arguments_coercer: ArgumentsCoercerKind,
}
impl CoercionConfig {
    /// Reads the configuration from the process environment. Missing
    /// variables keep their defaults; invalid values are logged and also
    /// keep their defaults.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(ARGUMENTS_COERCER_ENV_VAR).ok().as_deref())
    }

    pub(crate) fn from_env_value(env_val: Option<&str>) -> Self {
        let arguments_coercer = match env_val.map(str::parse::<ArgumentsCoercerKind>) {
            Some(Ok(kind)) => kind,
            Some(Err(err)) => {
                log::warn!(
                    "Invalid `{ARGUMENTS_COERCER_ENV_VAR}` environment variable \
                    value: {err}. Falling back to `{}`.",
                    ArgumentsCoercerKind::default(),
                );
                ArgumentsCoercerKind::default()
            },
            None => ArgumentsCoercerKind::default(),
        };
        Self { arguments_coercer }
    }
}
