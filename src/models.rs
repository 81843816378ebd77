use serde::{Deserialize, Serialize};

use crate::youtube::HostPolicy;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub host_policy: HostPolicy,
    /// Apps to try, in order, before the system default handler.
    pub handlers: Vec<String>,
}

impl Config {
    /// Parses a comma-separated handler list. An empty string clears it.
    pub fn parse_handlers(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.host_policy, HostPolicy::Loose);
        assert!(cfg.handlers.is_empty());
    }

    #[test]
    fn reads_policy_and_handlers() {
        let cfg: Config =
            serde_json::from_str(r#"{"host_policy":"strict","handlers":["mpv","firefox"]}"#)
                .unwrap();
        assert_eq!(cfg.host_policy, HostPolicy::Strict);
        assert_eq!(cfg.handlers, vec!["mpv", "firefox"]);
    }

    #[test]
    fn writes_lowercase_policy() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(json, r#"{"host_policy":"loose","handlers":[]}"#);
    }

    #[test]
    fn parse_handlers_splits_and_trims() {
        assert_eq!(Config::parse_handlers("mpv, firefox ,,"), vec!["mpv", "firefox"]);
        assert!(Config::parse_handlers("").is_empty());
    }
}
