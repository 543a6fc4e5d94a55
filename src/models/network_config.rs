use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::credentials::SignerKey;

/// Gas limit or gas price setting handed to the toolchain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GasSetting {
    #[default]
    Auto,
    Fixed(u64),
}

impl Serialize for GasSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GasSetting::Auto => serializer.serialize_str("auto"),
            GasSetting::Fixed(value) => serializer.serialize_u64(*value),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkDescriptor {
    pub name: String,
    pub rpc_url: String,
    pub chain_id: u64,
    pub accounts: Vec<Option<SignerKey>>,
    pub live: bool,
    pub save_deployments: bool,
    pub gas_multiplier: f64,
    pub gas: GasSetting,
    pub gas_price: GasSetting,
    pub timeout_ms: u64,
    pub http_headers: BTreeMap<String, String>,
    pub from: Option<String>,
}

/// Immutable name -> descriptor map, built once at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
    networks: BTreeMap<String, NetworkDescriptor>,
}

impl Registry {
    pub fn get(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks.get(name)
    }

    /// First network (by name) carrying `chain_id`.
    pub fn find_by_chain_id(&self, chain_id: u64) -> Option<&NetworkDescriptor> {
        self.networks.values().find(|n| n.chain_id == chain_id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkDescriptor> {
        self.networks.values()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl FromIterator<NetworkDescriptor> for Registry {
    fn from_iter<I: IntoIterator<Item = NetworkDescriptor>>(iter: I) -> Self {
        Self {
            networks: iter.into_iter().map(|n| (n.name.clone(), n)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToolchainConfig {
    pub solidity: String,
    pub default_network: String,
    pub registry: Registry,
}
