use crate::site::KeyPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which containers survive between marker-class selection and field mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFilterKind {
    /// Drop a fixed number of matches from each end, in document order.
    Positional { leading: usize, trailing: usize },
    /// Keep only containers that have both an `h3` and a `p` descendant.
    ContentShape,
}

impl Default for ContainerFilterKind {
    fn default() -> Self {
        ContainerFilterKind::Positional {
            leading: 2,
            trailing: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub source_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub require_success_status: bool,
    pub marker_class: String,
    pub container_filter: ContainerFilterKind,
    pub state_key: KeyPolicy,
    pub summary_chars: usize,
}
