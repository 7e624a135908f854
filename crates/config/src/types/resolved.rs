//! Resolved configuration snapshot.
//!
//! Responsibilities:
//! - Hold the validated, override-applied settings for one deployment attempt.
//! - Expose them read-only to the deployment/migration runner.
//!
//! Does NOT handle:
//! - Producing the snapshot (see `ProfileResolver::resolve`).
//! - Constructing the provider transport for remote endpoints.
//!
//! Invariants:
//! - Fields are private to the crate; a `ResolvedConfig` never changes after
//!   `resolve` returns it.
//! - Local endpoints carry a port in `1..=65535`; remote endpoints carry a
//!   provider factory and no host/port.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::compiler::CompilerSpec;
use crate::types::network::NetworkId;
use crate::types::provider::ProviderFactory;

/// Where a deployment connects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Endpoint {
    /// A node reachable directly at `host:port`.
    Local { host: String, port: u16 },
    /// A node reached through an external provider constructor.
    #[serde(rename_all = "camelCase")]
    Remote { provider_factory: ProviderFactory },
}

/// Validated settings for one profile, combined with the compiler pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub(crate) profile: String,
    pub(crate) endpoint: Endpoint,
    pub(crate) network_id: NetworkId,
    pub(crate) gas_limit: Option<u64>,
    pub(crate) confirmations: Option<u64>,
    pub(crate) timeout_blocks: Option<u64>,
    pub(crate) skip_dry_run: bool,
    pub(crate) compiler: CompilerSpec,
    pub(crate) resolved_at: DateTime<Utc>,
}

impl ResolvedConfig {
    /// Name of the profile this snapshot was resolved from.
    pub fn profile_name(&self) -> &str {
        &self.profile
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.endpoint, Endpoint::Remote { .. })
    }

    /// Host of a local endpoint.
    pub fn host(&self) -> Option<&str> {
        match &self.endpoint {
            Endpoint::Local { host, .. } => Some(host),
            Endpoint::Remote { .. } => None,
        }
    }

    /// Port of a local endpoint.
    pub fn port(&self) -> Option<u16> {
        match &self.endpoint {
            Endpoint::Local { port, .. } => Some(*port),
            Endpoint::Remote { .. } => None,
        }
    }

    /// Provider factory of a remote endpoint, passed through unresolved.
    pub fn provider_factory(&self) -> Option<&ProviderFactory> {
        match &self.endpoint {
            Endpoint::Local { .. } => None,
            Endpoint::Remote { provider_factory } => Some(provider_factory),
        }
    }

    pub fn network_id(&self) -> &NetworkId {
        &self.network_id
    }

    pub fn gas_limit(&self) -> Option<u64> {
        self.gas_limit
    }

    pub fn confirmations(&self) -> Option<u64> {
        self.confirmations
    }

    pub fn timeout_blocks(&self) -> Option<u64> {
        self.timeout_blocks
    }

    /// Defaults to `false` when the profile does not say.
    pub fn skip_dry_run(&self) -> bool {
        self.skip_dry_run
    }

    pub fn compiler(&self) -> &CompilerSpec {
        &self.compiler
    }

    pub fn resolved_at(&self) -> DateTime<Utc> {
        self.resolved_at
    }
}
