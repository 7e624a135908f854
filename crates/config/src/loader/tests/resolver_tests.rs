//! Resolution tests for `ProfileResolver`.
//!
//! Responsibilities:
//! - Test the documented resolution outcomes (local success, unknown profile,
//!   invalid profile naming the field, missing environment variable).
//! - Test lazy validation and that resolution never mutates the profile set.

use secrecy::ExposeSecret;

use super::{solc, standard_networks};
use crate::definitions::RawNetworks;
use crate::loader::env::Environment;
use crate::loader::error::ConfigError;
use crate::loader::resolver::ProfileResolver;
use crate::types::{
    Endpoint, LoadWarning, NetworkId, ProfileField, RawProfile, RawProviderFactory, ScalarValue,
};

fn invalid_field(result: Result<crate::types::ResolvedConfig, ConfigError>) -> ProfileField {
    match result {
        Err(ConfigError::InvalidProfile { field, .. }) => field,
        other => panic!("Expected InvalidProfile, got {:?}", other),
    }
}

#[test]
fn test_resolve_development_copies_local_fields() {
    let resolver = ProfileResolver::new();
    let profiles = resolver.load(&standard_networks(), &Environment::new());

    let resolved = resolver
        .resolve(&profiles, &solc(), "development")
        .unwrap();

    assert_eq!(resolved.profile_name(), "development");
    assert_eq!(resolved.host(), Some("127.0.0.1"));
    assert_eq!(resolved.port(), Some(8545));
    assert_eq!(resolved.network_id(), &NetworkId::Any);
    assert!(!resolved.is_remote());
    assert!(resolved.provider_factory().is_none());
    assert_eq!(resolved.compiler(), &solc());
    assert_eq!(resolved.gas_limit(), None);
    assert!(!resolved.skip_dry_run());
}

#[test]
fn test_resolve_unknown_profile() {
    let resolver = ProfileResolver::new();
    let profiles = resolver.load(&standard_networks(), &Environment::new());

    let result = resolver.resolve(&profiles, &solc(), "nonexistent");
    assert!(matches!(result, Err(ConfigError::UnknownProfile(name)) if name == "nonexistent"));
}

#[test]
fn test_profile_without_provider_factory_names_it() {
    let networks = RawNetworks::new().with_profile(
        "sepolia",
        RawProfile {
            network_id: Some(ScalarValue::Integer(11_155_111)),
            gas_limit: Some(ScalarValue::Integer(8_000_000)),
            ..RawProfile::default()
        },
    );
    let resolver = ProfileResolver::new();
    let profiles = resolver.load(&networks, &Environment::new());

    let result = resolver.resolve(&profiles, &solc(), "sepolia");
    let message = result.as_ref().map(|_| ()).unwrap_err().to_string();
    assert_eq!(invalid_field(result), ProfileField::ProviderFactory);
    assert!(message.contains("providerFactory"), "got: {message}");
}

#[test]
fn test_out_of_range_port_names_port() {
    let networks =
        RawNetworks::new().with_profile("broken", RawProfile::local("127.0.0.1", 99999, "*"));
    let resolver = ProfileResolver::new();
    let profiles = resolver.load(&networks, &Environment::new());

    let result = resolver.resolve(&profiles, &solc(), "broken");
    assert_eq!(invalid_field(result), ProfileField::Port);
}

#[test]
fn test_load_is_lazy_for_unrequested_placeholders() {
    let resolver = ProfileResolver::new();
    // MNEMONIC and INFURA_PROJECT_ID are not set.
    let profiles = resolver.load(&standard_networks(), &Environment::new());

    assert_eq!(profiles.len(), 2);
    assert!(profiles.contains("sepolia"));
    assert!(resolver.resolve(&profiles, &solc(), "development").is_ok());
}

#[test]
fn test_resolving_dormant_profile_reports_missing_variable() {
    let resolver = ProfileResolver::new();
    let env = Environment::new().with_var("INFURA_PROJECT_ID", "abc123");
    let profiles = resolver.load(&standard_networks(), &env);

    let result = resolver.resolve(&profiles, &solc(), "sepolia");
    assert!(matches!(
        result,
        Err(ConfigError::MissingEnvironmentVariable { profile, var })
            if profile == "sepolia" && var == "MNEMONIC"
    ));
}

#[test]
fn test_resolve_remote_profile_carries_provider_through() {
    let resolver = ProfileResolver::new();
    let env = Environment::new()
        .with_var("MNEMONIC", "candy maple cake sugar")
        .with_var("INFURA_PROJECT_ID", "abc123");
    let profiles = resolver.load(&standard_networks(), &env);

    let resolved = resolver.resolve(&profiles, &solc(), "sepolia").unwrap();

    assert!(resolved.is_remote());
    assert_eq!(resolved.host(), None);
    assert_eq!(resolved.port(), None);
    assert_eq!(resolved.network_id(), &NetworkId::Id(11_155_111));
    assert_eq!(resolved.gas_limit(), Some(8_000_000));
    assert_eq!(resolved.confirmations(), Some(2));
    assert_eq!(resolved.timeout_blocks(), Some(200));
    assert!(resolved.skip_dry_run());

    let provider = resolved.provider_factory().unwrap();
    assert_eq!(provider.constructor(), "hdwallet");
    assert_eq!(
        provider.argument("mnemonic").unwrap().expose_secret(),
        "candy maple cake sugar"
    );
}

#[test]
fn test_remote_profile_with_host_is_invalid() {
    let networks = RawNetworks::new().with_profile(
        "mixed",
        RawProfile {
            host: Some(ScalarValue::from("127.0.0.1")),
            ..RawProfile::remote(
                RawProviderFactory::new("hdwallet"),
                ScalarValue::Integer(5),
            )
        },
    );
    let resolver = ProfileResolver::new();
    let profiles = resolver.load(&networks, &Environment::new());

    assert_eq!(
        invalid_field(resolver.resolve(&profiles, &solc(), "mixed")),
        ProfileField::Host
    );
}

#[test]
fn test_resolve_does_not_mutate_profile_set() {
    let resolver = ProfileResolver::new();
    let networks = standard_networks().with_profile(
        "ganache-gui",
        RawProfile::local("127.0.0.1", 7545, ScalarValue::Integer(5777)),
    );
    let profiles = resolver.load(&networks, &Environment::new());
    let snapshot = profiles.clone();

    let first = resolver
        .resolve(&profiles, &solc(), "development")
        .unwrap();
    let second = resolver
        .resolve(&profiles, &solc(), "ganache-gui")
        .unwrap();
    let _ = resolver.resolve(&profiles, &solc(), "sepolia");

    assert_eq!(profiles, snapshot);
    assert_eq!(first.port(), Some(8545));
    assert_eq!(second.port(), Some(7545));
    assert_eq!(second.network_id(), &NetworkId::Id(5777));

    // Dropping one snapshot leaves the other intact.
    drop(first);
    assert_eq!(
        second.endpoint(),
        &Endpoint::Local {
            host: "127.0.0.1".to_string(),
            port: 7545
        }
    );
}

#[test]
fn test_resolve_is_repeatable() {
    let resolver = ProfileResolver::new();
    let profiles = resolver.load(&standard_networks(), &Environment::new());

    let first = resolver
        .resolve(&profiles, &solc(), "development")
        .unwrap();
    let second = resolver
        .resolve(&profiles, &solc(), "development")
        .unwrap();

    assert_eq!(first.endpoint(), second.endpoint());
    assert!(second.resolved_at() >= first.resolved_at());
}

#[test]
fn test_duplicate_definition_last_wins_with_warning() {
    let networks = standard_networks()
        .with_profile("development", RawProfile::local("127.0.0.1", 7545, "*"));
    let profiles = ProfileResolver::new().load(&networks, &Environment::new());

    assert_eq!(profiles.get("development").unwrap().port, Some(7545));
    assert_eq!(
        profiles.warnings(),
        &[LoadWarning::DuplicateProfile("development".to_string())]
    );
}

#[test]
fn test_resolve_all_reports_each_profile() {
    let resolver = ProfileResolver::new();
    let profiles = resolver.load(&standard_networks(), &Environment::new());

    let results = resolver.resolve_all(&profiles, &solc());
    let names: Vec<&str> = results.iter().map(|(name, _)| name.as_str()).collect();

    assert_eq!(names, vec!["development", "sepolia"]);
    assert!(results[0].1.is_ok());
    assert!(matches!(
        results[1].1,
        Err(ConfigError::MissingEnvironmentVariable { .. })
    ));
}

#[test]
fn test_unparsable_placeholder_value_is_invalid_value() {
    let networks = RawNetworks::new().with_profile(
        "development",
        RawProfile {
            port: Some(ScalarValue::from("${GANACHE_PORT}")),
            ..RawProfile::local("127.0.0.1", 8545, "*")
        },
    );
    let resolver = ProfileResolver::new();
    let env = Environment::new().with_var("GANACHE_PORT", "not-a-port");
    let profiles = resolver.load(&networks, &env);

    let result = resolver.resolve(&profiles, &solc(), "development");
    assert!(matches!(result, Err(ConfigError::InvalidValue { var, .. }) if var == "port"));
}

#[test]
fn test_profiles_sharing_override_names_are_flagged() {
    let networks = RawNetworks::new()
        .with_profile("my-net", RawProfile::local("127.0.0.1", 8545, "*"))
        .with_profile("my_net", RawProfile::local("127.0.0.1", 9545, "*"))
        .with_profile("other", RawProfile::local("127.0.0.1", 7545, "*"));
    let resolver = ProfileResolver::new();
    let env = Environment::new().with_var("CHAINPROFILE_MY_NET_PORT", "7545");
    let profiles = resolver.load(&networks, &env);

    assert_eq!(
        profiles.warnings(),
        &[LoadWarning::SharedOverrideName {
            stem: "CHAINPROFILE_MY_NET".to_string(),
            profiles: vec!["my-net".to_string(), "my_net".to_string()],
        }]
    );
    assert!(profiles.warnings()[0].to_string().contains("'my-net', 'my_net'"));
}
