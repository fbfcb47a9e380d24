//! Cache and message broker settings.

use secrecy::SecretString;
use serde::Serialize;

/// Cache service configuration.
#[derive(Debug, Clone, Serialize)]
pub struct CacheConfig {
    /// Cache address as host:port.
    pub addr: String,
    /// Logical database index.
    pub db: u32,
    /// Cache password, when the deployment requires one.
    #[serde(skip_serializing)]
    pub password: Option<SecretString>,
    /// Connection pool size.
    pub pool_size: u32,
}

/// Message broker configuration.
#[derive(Debug, Clone, Serialize)]
pub struct BrokerConfig {
    /// Broker address as host:port.
    pub addr: String,
    /// Consumer group name.
    pub consumer_group: String,
}
