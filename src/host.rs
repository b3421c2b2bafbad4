//! SMTP server host name parsing.

use std::fmt;
use std::net::{IpAddr, Ipv6Addr};

use crate::error::MailError;

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A validated SMTP server host: either a DNS name or an IP literal.
///
/// # Examples
///
/// ```
/// use mailsend::Host;
///
/// let host = Host::parse("smtp.example.com").unwrap();
/// assert_eq!(host.to_string(), "smtp.example.com");
///
/// let ip = Host::parse("[::1]").unwrap();
/// assert!(ip.ip().is_some());
///
/// assert!(Host::parse("smtp://example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    /// ASCII (punycode) domain name.
    Domain(String),
    /// IPv4 or IPv6 literal.
    Ip(IpAddr),
}

impl Host {
    /// Parse a host string.
    ///
    /// Surrounding whitespace is ignored. Internationalized domain names are
    /// converted to their ASCII form.
    pub fn parse(input: &str) -> Result<Self, MailError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(MailError::EmptyValue("host"));
        }

        if let Ok(ip) = input.parse::<IpAddr>() {
            return Ok(Self::Ip(ip));
        }
        if let Some(inner) = input.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return inner
                .parse::<Ipv6Addr>()
                .map(|ip| Self::Ip(IpAddr::V6(ip)))
                .map_err(|_| MailError::InvalidHost(input.to_string()));
        }

        let ascii =
            idna::domain_to_ascii(input).map_err(|_| MailError::InvalidHost(input.to_string()))?;
        let ascii = ascii.strip_suffix('.').unwrap_or(&ascii);

        if !is_valid_domain(ascii) {
            return Err(MailError::InvalidHost(input.to_string()));
        }

        Ok(Self::Domain(ascii.to_string()))
    }

    /// The IP address, if this host is an IP literal.
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::Ip(ip) => Some(*ip),
            Self::Domain(_) => None,
        }
    }

    /// Host string as passed to the SMTP client (IPv6 without brackets).
    pub fn to_dial_string(&self) -> String {
        match self {
            Self::Domain(domain) => domain.clone(),
            Self::Ip(ip) => ip.to_string(),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(domain) => write!(f, "{}", domain),
            Self::Ip(IpAddr::V6(ip)) => write!(f, "[{}]", ip),
            Self::Ip(ip) => write!(f, "{}", ip),
        }
    }
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }
    // A numeric last label means a malformed IPv4 address, not a name.
    if domain
        .rsplit('.')
        .next()
        .is_some_and(|last| last.bytes().all(|b| b.is_ascii_digit()))
    {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("smtp.example.com", "smtp.example.com")]
    #[case("  smtp.example.com  ", "smtp.example.com")]
    #[case("localhost", "localhost")]
    #[case("SMTP.Example.COM", "smtp.example.com")]
    #[case("mail.example.com.", "mail.example.com")]
    #[case("münchen.de", "xn--mnchen-3ya.de")]
    #[case("1and1.com", "1and1.com")]
    #[case("mx.123.example", "mx.123.example")]
    fn parses_domains(#[case] input: &str, #[case] expected: &str) {
        let host = Host::parse(input).unwrap();
        assert_eq!(host, Host::Domain(expected.to_string()));
    }

    #[rstest]
    #[case("127.0.0.1")]
    #[case("::1")]
    #[case("[2001:db8::1]")]
    fn parses_ip_literals(#[case] input: &str) {
        let host = Host::parse(input).unwrap();
        assert!(host.ip().is_some());
    }

    #[rstest]
    #[case("smtp://example.com")]
    #[case("example.com:587")]
    #[case("exa mple.com")]
    #[case("smtp..example.com")]
    #[case("-smtp.example.com")]
    #[case("smtp-.example.com")]
    #[case("example.com/path")]
    #[case("[not-an-ip]")]
    #[case("%zz")]
    #[case("999.999.999.999")]
    #[case("256.1.1.1")]
    #[case("1.2.3")]
    #[case("12345")]
    fn rejects_invalid_hosts(#[case] input: &str) {
        let err = Host::parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidHost);
    }

    #[test]
    fn rejects_overlong_label() {
        let host = format!("{}.com", "a".repeat(64));
        assert_eq!(Host::parse(&host).unwrap_err().kind(), ErrorKind::InvalidHost);
    }

    #[test]
    fn empty_host_is_empty_value() {
        assert_eq!(Host::parse("   ").unwrap_err().kind(), ErrorKind::EmptyValue);
    }

    #[test]
    fn display() {
        assert_eq!(Host::parse("[::1]").unwrap().to_string(), "[::1]");
        assert_eq!(Host::parse("10.0.0.1").unwrap().to_string(), "10.0.0.1");
        assert_eq!(
            Host::parse("smtp.example.com").unwrap().to_dial_string(),
            "smtp.example.com"
        );
        assert_eq!(Host::parse("::1").unwrap().to_dial_string(), "::1");
    }
}
