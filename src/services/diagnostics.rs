use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::models::{
    credentials::{Credentials, SignerRole},
    network_config::Registry,
};

/// Non-fatal findings about a built registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistryWarning {
    MissingCredential {
        role: SignerRole,
        variable: &'static str,
    },
    DuplicateChainId {
        chain_id: u64,
        networks: Vec<String>,
    },
}

impl fmt::Display for RegistryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryWarning::MissingCredential { role, variable } => write!(
                f,
                "{:?} signer is not configured ({} is unset); its account slot will be empty",
                role, variable
            ),
            RegistryWarning::DuplicateChainId { chain_id, networks } => write!(
                f,
                "chain id {} is shared by {}",
                chain_id,
                networks.join(", ")
            ),
        }
    }
}

pub fn check_registry(registry: &Registry, credentials: &Credentials) -> Vec<RegistryWarning> {
    let mut warnings: Vec<RegistryWarning> = [SignerRole::Primary, SignerRole::Secondary]
        .into_iter()
        .filter(|role| credentials.get(*role).is_none())
        .map(|role| RegistryWarning::MissingCredential {
            role,
            variable: role.variable(),
        })
        .collect();

    let mut by_chain: BTreeMap<u64, Vec<String>> = BTreeMap::new();
    for network in registry.iter() {
        by_chain
            .entry(network.chain_id)
            .or_default()
            .push(network.name.clone());
    }
    warnings.extend(
        by_chain
            .into_iter()
            .filter(|(_, networks)| networks.len() > 1)
            .map(|(chain_id, networks)| RegistryWarning::DuplicateChainId { chain_id, networks }),
    );

    warnings
}
