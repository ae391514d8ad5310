use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which address families SRV targets are resolved for, and in what order
/// the addresses are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IpVersionSetting {
    V4Only,
    V6Only,
    #[default]
    V4V6,
    V6V4,
}

impl IpVersionSetting {
    pub fn v4(&self) -> bool {
        !matches!(self, IpVersionSetting::V6Only)
    }

    pub fn v6(&self) -> bool {
        !matches!(self, IpVersionSetting::V4Only)
    }
}

impl FromStr for IpVersionSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v4only" | "4" => Ok(IpVersionSetting::V4Only),
            "v6only" | "6" => Ok(IpVersionSetting::V6Only),
            "v4v6" | "46" => Ok(IpVersionSetting::V4V6),
            "v6v4" | "64" => Ok(IpVersionSetting::V6V4),
            _ => Err(ConfigError::InvalidIpVersion(s.to_string())),
        }
    }
}

impl fmt::Display for IpVersionSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IpVersionSetting::V4Only => "v4only",
            IpVersionSetting::V6Only => "v6only",
            IpVersionSetting::V4V6 => "v4v6",
            IpVersionSetting::V6V4 => "v6v4",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Address families to resolve and their preference order
    pub ip_version: IpVersionSetting,
}

impl ResolverConfig {
    /// Create a ResolverConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let ip_version = std::env::var("DNSSEC_SRV_IP_VERSION").ok();
        let ipv6_enabled = std::env::var("DNSSEC_SRV_IPV6_ENABLED").ok();
        Self::from_values(ip_version.as_deref(), ipv6_enabled.as_deref())
    }

    fn from_values(
        ip_version: Option<&str>,
        ipv6_enabled: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = ip_version {
            config.ip_version = value.parse()?;
        }

        // A plain IPv6 switch only narrows the default setting.
        if let Some(value) = ipv6_enabled {
            let enabled = parse_bool(value, true);
            match (ip_version.is_some(), enabled) {
                (false, false) => config.ip_version = IpVersionSetting::V4Only,
                (true, false) if config.ip_version.v6() => {
                    return Err(ConfigError::Conflict(format!(
                        "IPv6 disabled but IP version is {}",
                        config.ip_version
                    )));
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Parse a boolean from a string, with a default value for invalid input
fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.ip_version, IpVersionSetting::V4V6);
        assert!(config.ip_version.v4() && config.ip_version.v6());
    }

    #[test]
    fn test_ip_version_parsing() {
        assert_eq!(
            "v4only".parse::<IpVersionSetting>().unwrap(),
            IpVersionSetting::V4Only
        );
        assert_eq!(
            "6".parse::<IpVersionSetting>().unwrap(),
            IpVersionSetting::V6Only
        );
        assert_eq!(
            " V6V4 ".parse::<IpVersionSetting>().unwrap(),
            IpVersionSetting::V6V4
        );
        assert_eq!(
            "46".parse::<IpVersionSetting>().unwrap(),
            IpVersionSetting::V4V6
        );
        assert!("v5".parse::<IpVersionSetting>().is_err());

        for setting in [
            IpVersionSetting::V4Only,
            IpVersionSetting::V6Only,
            IpVersionSetting::V4V6,
            IpVersionSetting::V6V4,
        ] {
            assert_eq!(
                setting.to_string().parse::<IpVersionSetting>().unwrap(),
                setting
            );
        }
    }

    #[test]
    fn test_families() {
        assert!(IpVersionSetting::V4Only.v4());
        assert!(!IpVersionSetting::V4Only.v6());
        assert!(!IpVersionSetting::V6Only.v4());
        assert!(IpVersionSetting::V6V4.v4() && IpVersionSetting::V6V4.v6());
    }

    #[test]
    fn test_from_values() {
        let config = ResolverConfig::from_values(Some("v6v4"), None).unwrap();
        assert_eq!(config.ip_version, IpVersionSetting::V6V4);

        let config = ResolverConfig::from_values(None, Some("off")).unwrap();
        assert_eq!(config.ip_version, IpVersionSetting::V4Only);

        let config = ResolverConfig::from_values(Some("v4only"), Some("no")).unwrap();
        assert_eq!(config.ip_version, IpVersionSetting::V4Only);

        assert!(
            ResolverConfig::from_values(Some("v6only"), Some("false")).is_err()
        );
        assert!(ResolverConfig::from_values(Some("bogus"), None).is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true", false));
        assert!(parse_bool("YES", false));
        assert!(parse_bool("1", false));
        assert!(!parse_bool("off", true));
        assert!(!parse_bool("0", true));
        assert!(parse_bool("invalid", true));
        assert!(!parse_bool("invalid", false));
    }
}
