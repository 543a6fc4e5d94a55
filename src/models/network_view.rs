use serde::Serialize;

use super::network_config::{GasSetting, NetworkDescriptor};

/// Public view of a network; signer keys are masked.
#[derive(Debug, Serialize)]
pub struct NetworkView {
    pub name: String,
    pub rpc_url: String,
    pub chain_id: u64,
    pub accounts: Vec<Option<String>>,
    pub live: bool,
    pub save_deployments: bool,
    pub gas_multiplier: f64,
    pub gas: GasSetting,
    pub gas_price: GasSetting,
    pub timeout_ms: u64,
}

impl From<&NetworkDescriptor> for NetworkView {
    fn from(network: &NetworkDescriptor) -> Self {
        Self {
            name: network.name.clone(),
            rpc_url: network.rpc_url.clone(),
            chain_id: network.chain_id,
            accounts: network
                .accounts
                .iter()
                .map(|slot| slot.as_ref().map(|key| key.masked()))
                .collect(),
            live: network.live,
            save_deployments: network.save_deployments,
            gas_multiplier: network.gas_multiplier,
            gas: network.gas,
            gas_price: network.gas_price,
            timeout_ms: network.timeout_ms,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub solidity: String,
    pub default_network: String,
    pub networks: Vec<String>,
}
