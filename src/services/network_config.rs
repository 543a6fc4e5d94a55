use std::collections::BTreeMap;

use log::debug;

use crate::{
    errors::CustomError,
    models::{
        credentials::Credentials,
        network_config::{GasSetting, NetworkDescriptor, Registry, ToolchainConfig},
    },
};

pub const SOLIDITY_VERSION: &str = "0.8.17";
pub const DEFAULT_NETWORK: &str = "hardhat";

const GAS_MULTIPLIER: f64 = 2.0;
const TIMEOUT_MS: u64 = 20_000;

struct NetworkSpec {
    name: &'static str,
    rpc_url: &'static str,
    chain_id: u64,
}

const NETWORKS: &[NetworkSpec] = &[
    // Fantom
    NetworkSpec {
        name: "fantomTestnet",
        rpc_url: "https://rpc.testnet.fantom.network/",
        chain_id: 4002,
    },
    NetworkSpec {
        name: "fantomMainnet",
        rpc_url: "https://rpcapi.fantom.network",
        chain_id: 250,
    },
    // Polygon
    NetworkSpec {
        name: "polygonMumbaiTestnet",
        rpc_url: "https://matic-mumbai.chainstacklabs.com",
        chain_id: 80001,
    },
    NetworkSpec {
        name: "polygonMainnet",
        rpc_url: "https://polygon.llamarpc.com",
        chain_id: 137,
    },
    // Harmony, shard zero
    NetworkSpec {
        name: "harmonyMainnet",
        rpc_url: "https://harmony-mainnet.chainstacklabs.com",
        chain_id: 1666600000,
    },
    NetworkSpec {
        name: "harmonyTestnet",
        rpc_url: "https://api.s0.b.hmny.io",
        chain_id: 1666700000,
    },
];

fn descriptor(spec: &NetworkSpec, credentials: &Credentials) -> NetworkDescriptor {
    NetworkDescriptor {
        name: spec.name.to_string(),
        rpc_url: spec.rpc_url.to_string(),
        chain_id: spec.chain_id,
        accounts: credentials.accounts(),
        live: false,
        save_deployments: true,
        gas_multiplier: GAS_MULTIPLIER,
        gas: GasSetting::Auto,
        gas_price: GasSetting::Auto,
        timeout_ms: TIMEOUT_MS,
        http_headers: BTreeMap::new(),
        from: None,
    }
}

/// Build the network registry from a credential snapshot.
///
/// Only the account slots depend on `credentials`; every other field is a
/// literal. Missing credentials are not an error here.
pub fn build_registry(credentials: &Credentials) -> Registry {
    NETWORKS
        .iter()
        .map(|spec| descriptor(spec, credentials))
        .collect()
}

pub fn build_toolchain_config(credentials: &Credentials) -> ToolchainConfig {
    ToolchainConfig {
        solidity: SOLIDITY_VERSION.to_string(),
        default_network: DEFAULT_NETWORK.to_string(),
        registry: build_registry(credentials),
    }
}

/// Get network configuration based on chain ID
pub fn get_network_config(
    registry: &Registry,
    chain_id: u64,
) -> Result<&NetworkDescriptor, CustomError> {
    debug!("looking up chain {}", chain_id);
    registry
        .find_by_chain_id(chain_id)
        .ok_or(CustomError::UnsupportedChain(chain_id))
}

pub fn get_network_by_name<'a>(
    registry: &'a Registry,
    name: &str,
) -> Result<&'a NetworkDescriptor, CustomError> {
    debug!("looking up network {}", name);
    registry
        .get(name)
        .ok_or_else(|| CustomError::NetworkNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::credentials::{SignerKey, PRIMARY_SIGNER_VAR, SECONDARY_SIGNER_VAR};

    const EXPECTED: &[(&str, u64)] = &[
        ("fantomTestnet", 4002),
        ("fantomMainnet", 250),
        ("polygonMumbaiTestnet", 80001),
        ("polygonMainnet", 137),
        ("harmonyMainnet", 1666600000),
        ("harmonyTestnet", 1666700000),
    ];

    fn credentials(primary: Option<&str>, secondary: Option<&str>) -> Credentials {
        Credentials::from_lookup(|name| match name {
            PRIMARY_SIGNER_VAR => primary.map(str::to_string),
            SECONDARY_SIGNER_VAR => secondary.map(str::to_string),
            _ => None,
        })
    }

    #[test]
    fn contains_exactly_the_known_networks() {
        let registry = build_registry(&credentials(Some("K1"), Some("K2")));

        assert_eq!(registry.len(), EXPECTED.len());
        for (name, chain_id) in EXPECTED {
            let network = registry.get(name).expect("network present");
            assert_eq!(network.name, *name);
            assert_eq!(network.chain_id, *chain_id);
            assert_eq!(network.gas_multiplier, 2.0);
        }
    }

    #[test]
    fn accounts_follow_the_environment() {
        let registry = build_registry(&credentials(Some("0xAAA"), Some("0xBBB")));
        for network in registry.iter() {
            assert_eq!(
                network.accounts,
                vec![Some(SignerKey::new("0xAAA")), Some(SignerKey::new("0xBBB"))]
            );
        }
    }

    #[test]
    fn missing_credentials_yield_empty_slots() {
        let registry = build_registry(&credentials(None, None));
        assert_eq!(registry.len(), EXPECTED.len());
        for network in registry.iter() {
            assert_eq!(network.accounts, vec![None, None]);
        }
    }

    #[test]
    fn scalar_fields_ignore_the_environment() {
        let with_keys = build_registry(&credentials(Some("K1"), Some("K2")));
        let without_keys = build_registry(&credentials(None, Some("other")));

        for (a, b) in with_keys.iter().zip(without_keys.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.rpc_url, b.rpc_url);
            assert_eq!(a.chain_id, b.chain_id);
            assert_eq!(a.live, b.live);
            assert_eq!(a.save_deployments, b.save_deployments);
            assert_eq!(a.gas_multiplier, b.gas_multiplier);
            assert_eq!(a.timeout_ms, b.timeout_ms);
        }
        assert!(with_keys.iter().all(|n| !n.live && n.save_deployments));
    }

    #[test]
    fn building_twice_gives_equal_registries() {
        let creds = credentials(Some("K1"), None);
        assert_eq!(build_registry(&creds), build_registry(&creds));
        assert_eq!(build_toolchain_config(&creds), build_toolchain_config(&creds));
    }

    #[test]
    fn toolchain_config_carries_compiler_version() {
        let config = build_toolchain_config(&Credentials::default());
        assert_eq!(config.solidity, "0.8.17");
        assert_eq!(config.default_network, "hardhat");
    }

    #[test]
    fn looks_up_by_chain_id() {
        let registry = build_registry(&Credentials::default());
        let network = get_network_config(&registry, 137).unwrap();
        assert_eq!(network.name, "polygonMainnet");
        assert!(matches!(
            get_network_config(&registry, 1),
            Err(CustomError::UnsupportedChain(1))
        ));
    }

    #[test]
    fn looks_up_by_name() {
        let registry = build_registry(&Credentials::default());
        assert_eq!(get_network_by_name(&registry, "fantomMainnet").unwrap().chain_id, 250);
        assert!(matches!(
            get_network_by_name(&registry, "hardhat"),
            Err(CustomError::NetworkNotFound(_))
        ));
    }
}
