use std::{collections::BTreeMap, fs, path::Path};

use log::info;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::{
    errors::CustomError,
    models::{
        credentials::SignerKey,
        network_config::{GasSetting, NetworkDescriptor, ToolchainConfig},
    },
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedNetwork<'a> {
    url: &'a str,
    accounts: &'a [Option<SignerKey>],
    chain_id: u64,
    live: bool,
    save_deployments: bool,
    gas_multiplier: f64,
    gas: GasSetting,
    gas_price: GasSetting,
    timeout: u64,
    #[serde(skip_serializing_if = "no_headers")]
    http_headers: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
}

fn no_headers(headers: &&BTreeMap<String, String>) -> bool {
    headers.is_empty()
}

impl<'a> From<&'a NetworkDescriptor> for ExportedNetwork<'a> {
    fn from(network: &'a NetworkDescriptor) -> Self {
        Self {
            url: &network.rpc_url,
            accounts: &network.accounts,
            chain_id: network.chain_id,
            live: network.live,
            save_deployments: network.save_deployments,
            gas_multiplier: network.gas_multiplier,
            gas: network.gas,
            gas_price: network.gas_price,
            timeout: network.timeout_ms,
            http_headers: &network.http_headers,
            from: network.from.as_deref(),
        }
    }
}

/// Render the config object in the shape the deploy toolchain loads.
/// The output contains raw signer keys.
pub fn to_toolchain_json(config: &ToolchainConfig) -> Result<Value, CustomError> {
    let mut networks = Map::new();
    networks.insert(config.default_network.clone(), json!({}));
    for network in config.registry.iter() {
        let value = serde_json::to_value(ExportedNetwork::from(network))
            .map_err(|e| CustomError::ExportError(e.to_string()))?;
        networks.insert(network.name.clone(), value);
    }

    Ok(json!({
        "solidity": config.solidity,
        "defaultNetwork": config.default_network,
        "networks": networks,
    }))
}

pub fn write_toolchain_json(config: &ToolchainConfig, path: &Path) -> Result<(), CustomError> {
    let value = to_toolchain_json(config)?;
    let rendered =
        serde_json::to_string_pretty(&value).map_err(|e| CustomError::ExportError(e.to_string()))?;
    fs::write(path, rendered)
        .map_err(|e| CustomError::ExportError(format!("{}: {}", path.display(), e)))?;
    info!("wrote toolchain config to {}", path.display());
    Ok(())
}
