//! Legacy `v1alpha1` machine configuration.
//!
//! Documents in this form have no `kind`/`version`/`spec` envelope; they are
//! recognized by a top-level `machine` key and decoded whole.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a legacy configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Config format version string carried inside the document.
    pub version: String,
    pub debug: bool,
    pub persist: bool,
    pub machine: MachineConfig,
    pub cluster: Option<ClusterConfig>,
}

/// Role a machine plays in the cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineType {
    #[default]
    Worker,
    Controlplane,
    Init,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineConfig {
    #[serde(rename = "type")]
    pub machine_type: MachineType,
    pub token: String,
    #[serde(rename = "certSANs")]
    pub cert_sans: Vec<String>,
    pub kubelet: Option<KubeletConfig>,
    pub network: Option<NetworkConfig>,
    pub install: Option<InstallConfig>,
    pub env: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KubeletConfig {
    pub image: String,
    pub extra_args: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfig {
    pub hostname: String,
    pub interfaces: Vec<NetworkInterface>,
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkInterface {
    pub interface: String,
    pub cidr: String,
    pub dhcp: bool,
    pub mtu: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallConfig {
    pub disk: String,
    pub image: String,
    pub wipe: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterConfig {
    pub cluster_name: String,
    pub control_plane: ControlPlaneConfig,
    pub network: ClusterNetworkConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlPlaneConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterNetworkConfig {
    pub dns_domain: String,
    pub pod_subnets: Vec<String>,
    pub service_subnets: Vec<String>,
}
