use std::net::IpAddr;
use serde::Deserialize;
use crate::{CsrConfResult, error::CsrConfError};

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// How inputs are treated before rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Accept anything, missing arguments render as empty
    #[default]
    Permissive,
    /// Require a parseable ip address and an RFC 1123 hostname
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInputs {
    pub ip: String,
    pub hostname: String,
}

pub fn resolve_inputs(policy: Policy, ip: Option<String>, hostname: Option<String>) -> CsrConfResult<RequestInputs> {
    match policy {
        Policy::Permissive => {
            let ip = ip.unwrap_or_default();
            let hostname = hostname.unwrap_or_default();

            if ip.is_empty() {
                tracing::warn!("ip is empty, IP.1 will be blank");
            }
            if hostname.is_empty() {
                tracing::warn!("hostname is empty, CN and DNS.1 will be blank");
            }

            Ok(RequestInputs { ip, hostname })
        }
        Policy::Strict => {
            let ip = required("ip", ip)?;
            let hostname = required("hostname", hostname)?;

            if ip.parse::<IpAddr>().is_err() {
                return Err(CsrConfError::InvalidIpFormat(ip));
            }
            if !is_valid_hostname(&hostname) {
                return Err(CsrConfError::InvalidHostnameFormat(hostname));
            }

            Ok(RequestInputs { ip, hostname })
        }
    }
}

fn required(name: &'static str, value: Option<String>) -> CsrConfResult<String> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Err(CsrConfError::MissingArgument(name));
    };
    Ok(value)
}

pub fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    hostname.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}
