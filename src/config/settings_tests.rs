//! Tests for the configuration record and its file format.

use std::path::Path;

use tempfile::TempDir;

use super::{ConfigError, Configuration, DnsSettings, NotificationSettings, field};

fn sample() -> Configuration {
    Configuration {
        notification: NotificationSettings {
            recipient_key: "user-key".to_string(),
            app_key: "app-key".to_string(),
        },
        dns: DnsSettings {
            base_url: "https://api.cloudflare.com/client/v4/".to_string(),
            api_token: "token-123".to_string(),
            zone_id: "zone-abc".to_string(),
            domain: "home.example.com".to_string(),
        },
        ip_echo_url: None,
    }
}

const EXISTING_FILE: &str = r#"{
  "pushover": {
    "key_user": "user-key",
    "key_app": "app-key"
  },
  "cloudflare": {
    "url": "https://api.cloudflare.com/client/v4/",
    "api_token": "token-123",
    "id_zone": "zone-abc",
    "domain": "home.example.com"
  }
}"#;

mod file_format {
    use super::*;

    #[test]
    fn parses_existing_deployment_file() {
        let config = Configuration::from_json(EXISTING_FILE, Path::new("config.json")).unwrap();
        assert_eq!(config, sample());
    }

    #[test]
    fn serializes_to_existing_layout_byte_for_byte() {
        assert_eq!(sample().to_json().unwrap(), EXISTING_FILE);
    }

    #[test]
    fn ip_echo_url_is_written_only_when_set() {
        let mut config = sample();
        assert!(!config.to_json().unwrap().contains("ip_echo_url"));

        config.ip_echo_url = Some("https://ifconfig.me/ip".to_string());
        assert!(config.to_json().unwrap().contains("\"ip_echo_url\""));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = Configuration::from_json("{ not json", Path::new("c.json")).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.is_unavailable());
    }

    #[test]
    fn missing_group_is_parse_error() {
        let err = Configuration::from_json(
            r#"{"pushover": {"key_user": "u", "key_app": "a"}}"#,
            Path::new("c.json"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

mod persistence {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut config = sample();
        config.ip_echo_url = Some("https://icanhazip.com".to_string());

        config.save(&path).unwrap();
        let loaded = Configuration::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn save_creates_parent_directories_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        sample().save(&path).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("nested").join("config.json.tmp").exists());
    }

    #[test]
    fn save_keeps_existing_extension_when_staging() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(dir.path().join("config.tmp"), "unrelated").unwrap();

        sample().save(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("config.tmp")).unwrap(),
            "unrelated"
        );
        assert_eq!(Configuration::load(&path).unwrap(), sample());
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = Configuration::load(&dir.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn load_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Configuration::load(dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::FileRead { .. }));
        assert!(err.is_unavailable());
    }
}

mod validation {
    use super::*;

    #[test]
    fn sample_is_valid() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_field_is_missing_required() {
        let mut config = sample();
        config.dns.zone_id = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired { field: f, .. } if f == field::ZONE_ID
        ));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = sample();
        config.dns.base_url = "ftp://api.example.com/".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { field: f, .. } if f == field::BASE_URL));
    }

    #[test]
    fn unparsable_echo_url_is_rejected() {
        let mut config = sample();
        config.ip_echo_url = Some("not a url".to_string());

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn ip_echo_url_defaults_to_ipify() {
        assert_eq!(
            sample().ip_echo_url().unwrap().as_str(),
            "https://api.ipify.org/"
        );
    }
}

mod redaction {
    use super::*;

    #[test]
    fn debug_hides_secrets() {
        let debug = format!("{:?}", sample());

        assert!(!debug.contains("token-123"));
        assert!(!debug.contains("app-key"));
        assert!(!debug.contains("user-key"));
        assert!(debug.contains("home.example.com"));
    }

    #[test]
    fn display_names_domain_but_not_token() {
        let display = sample().to_string();

        assert!(display.contains("home.example.com"));
        assert!(!display.contains("token-123"));
    }
}
