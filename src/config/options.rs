// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: DataSource,
    pub output: OutputOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            output: OutputOptions::default(),
        }
    }
}

/// Where the one static read comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Http { host: String, port: u16, path: String },
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_FILE))
    }
}

impl DataSource {
    /// `http://host[:port]/path` becomes `Http`; anything else is a file path.
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(DataSource::default());
        }
        if text.starts_with("https://") {
            return Err(format!("Only plain http:// sources are supported: {}", text));
        }
        let Some(rest) = text.strip_prefix("http://") else {
            return Ok(DataSource::File(PathBuf::from(text)));
        };

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let (host, port) = split_authority(authority).map_err(|e| format!("{} in {}", e, text))?;
        if host.is_empty() {
            return Err(format!("Missing host in {}", text));
        }
        Ok(DataSource::Http { host: s!(host), port, path: s!(path) })
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::File(p) => p.display().to_string(),
            DataSource::Http { host, port, path } => format!("http://{}:{port}{path}", host_literal(host)),
        }
    }
}

/// `host[:port]` or `[v6addr][:port]`. The brackets are stripped so the host
/// can go straight to `TcpStream::connect`.
fn split_authority(authority: &str) -> Result<(&str, u16), String> {
    let (host, port) = match authority.strip_prefix('[') {
        Some(rest) => {
            let (h, after) = rest.split_once(']').ok_or_else(|| s!("Unclosed '[' in host"))?;
            match after {
                "" => (h, None),
                _ => match after.strip_prefix(':') {
                    Some(p) => (h, Some(p)),
                    None => return Err(format!("Unexpected '{}' after IPv6 host", after)),
                },
            }
        }
        None => match authority.rsplit_once(':') {
            Some((_, _)) if authority.matches(':').count() > 1 => {
                return Err(s!("IPv6 hosts must be bracketed, e.g. http://[::1]:8000/"));
            }
            Some((h, p)) => (h, Some(p)),
            None => (authority, None),
        },
    };
    let port = match port {
        Some(p) => p.parse().map_err(|_| s!("Bad port"))?,
        None => 80,
    };
    Ok((host, port))
}

/// Re-bracket IPv6 literals for URLs and `Host:` headers.
pub fn host_literal(host: &str) -> String {
    if host.contains(':') { format!("[{host}]") } else { s!(host) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// None = stdout
    pub out: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { format: OutputFormat::Text, out: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(host: &str, port: u16, path: &str) -> DataSource {
        DataSource::Http { host: s!(host), port, path: s!(path) }
    }

    #[test]
    fn plain_hosts_and_ports() {
        assert_eq!(DataSource::parse("http://localhost:8000/data.json"), Ok(http("localhost", 8000, "/data.json")));
        assert_eq!(DataSource::parse("http://example.org"), Ok(http("example.org", 80, "/")));
        assert_eq!(DataSource::parse("dados/data.json"), Ok(DataSource::File(PathBuf::from("dados/data.json"))));
        assert!(DataSource::parse("http://example.org:http/x").is_err());
        assert!(DataSource::parse("https://example.org/x").is_err());
    }

    #[test]
    fn bracketed_ipv6_host_is_unwrapped() {
        let src = DataSource::parse("http://[::1]:8000/x").unwrap();
        assert_eq!(src, http("::1", 8000, "/x"));
        assert_eq!(src.describe(), "http://[::1]:8000/x");
        assert_eq!(DataSource::parse("http://[fe80::2]/"), Ok(http("fe80::2", 80, "/")));
    }

    #[test]
    fn malformed_ipv6_authority_is_rejected() {
        assert!(DataSource::parse("http://::1:8000/x").is_err());
        assert!(DataSource::parse("http://[::1/x").is_err());
        assert!(DataSource::parse("http://[::1]8000/x").is_err());
    }
}
