//! Formatter tests.
//!
//! - `json_tests.rs`: JSON output shape and redaction
//! - `text_tests.rs`: text output layout and redaction


use chainprofile_config::{
    CompilerSpec, Environment, ProfileResolver, RawNetworks, RawProfile, RawProviderFactory,
    ResolvedConfig, ScalarValue,
};

/// Compiler pin shared by formatter tests.
pub fn solc() -> CompilerSpec {
    CompilerSpec::new("solc", "0.8.22".parse().unwrap())
}

pub const MNEMONIC: &str = "candy maple cake sugar pudding cream honey";

fn networks() -> RawNetworks {
    RawNetworks::new()
        .with_profile("development", RawProfile::local("127.0.0.1", 8545, "*"))
        .with_profile(
            "sepolia",
            RawProfile {
                gas_limit: Some(ScalarValue::Integer(8_000_000)),
                ..RawProfile::remote(
                    RawProviderFactory::new("hdwallet")
                        .with_argument("mnemonic", "${MNEMONIC}")
                        .with_argument("url", "https://sepolia.infura.io/v3/abc123"),
                    ScalarValue::Integer(11_155_111),
                )
            },
        )
}

/// Resolve a profile from the shared test networks.
pub fn resolved(name: &str) -> ResolvedConfig {
    let resolver = ProfileResolver::new();
    let env = Environment::new().with_var("MNEMONIC", MNEMONIC);
    let profiles = resolver.load(&networks(), &env);
    resolver.resolve(&profiles, &solc(), name).unwrap()
}
