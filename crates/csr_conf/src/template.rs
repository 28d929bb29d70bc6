use std::fmt;
use serde::Deserialize;

pub const DEFAULT_BITS: u32 = 2048;
pub const DEFAULT_MD: &str = "sha256";
pub const COUNTRY: &str = "DE";
pub const STATE: &str = "Bavaria";
pub const LOCALITY: &str = "Munich";
pub const ORGANIZATION: &str = "BiomedLab";
pub const ORGANIZATIONAL_UNIT: &str = "Biomed-IoT";

/// Fixed fields of the request configuration. Everything in the rendered
/// document except the common name and the alternative names comes from here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubjectProfile {
    pub default_bits: u32,
    pub default_md: String,
    pub country: String,
    pub state: String,
    pub locality: String,
    pub organization: String,
    pub organizational_unit: String,
}

impl Default for SubjectProfile {
    fn default() -> Self {
        Self {
            default_bits: DEFAULT_BITS,
            default_md: DEFAULT_MD.to_string(),
            country: COUNTRY.to_string(),
            state: STATE.to_string(),
            locality: LOCALITY.to_string(),
            organization: ORGANIZATION.to_string(),
            organizational_unit: ORGANIZATIONAL_UNIT.to_string(),
        }
    }
}

impl SubjectProfile {
    pub fn request<'a>(&'a self, ip: &'a str, hostname: &'a str) -> RequestConfig<'a> {
        RequestConfig {
            profile: self,
            ip,
            hostname,
        }
    }
}

/// An OpenSSL `req` configuration ready to be written out.
///
/// `hostname` lands in `CN` and `DNS.1`, `ip` in `IP.1`. Nothing is checked
/// here; see [`crate::validate`] for the optional pre-condition.
#[derive(Debug, Clone, Copy)]
pub struct RequestConfig<'a> {
    profile: &'a SubjectProfile,
    ip: &'a str,
    hostname: &'a str,
}

impl fmt::Display for RequestConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.profile;

        writeln!(f, "[ req ]")?;
        writeln!(f, "default_bits       = {}", p.default_bits)?;
        writeln!(f, "default_md         = {}", p.default_md)?;
        writeln!(f, "prompt             = no")?;
        writeln!(f, "distinguished_name = req_distinguished_name")?;
        writeln!(f, "req_extensions     = req_ext")?;
        writeln!(f)?;

        writeln!(f, "[ req_distinguished_name ]")?;
        writeln!(f, "C  = {}", p.country)?;
        writeln!(f, "ST = {}", p.state)?;
        writeln!(f, "L  = {}", p.locality)?;
        writeln!(f, "O  = {}", p.organization)?;
        writeln!(f, "OU = {}", p.organizational_unit)?;
        writeln!(f, "CN = {}", self.hostname)?;
        writeln!(f)?;

        writeln!(f, "[ req_ext ]")?;
        writeln!(f, "subjectAltName = @alt_names")?;
        writeln!(f)?;

        writeln!(f, "[ alt_names ]")?;
        writeln!(f, "DNS.1   = {}", self.hostname)?;
        writeln!(f, "IP.1    = {}", self.ip)
    }
}

/// Renders the request configuration with the default profile.
pub fn render(ip: &str, hostname: &str) -> String {
    SubjectProfile::default().request(ip, hostname).to_string()
}
