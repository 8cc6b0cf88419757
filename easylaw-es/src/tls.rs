use std::{fs::File, io::BufReader};

use reqwest::{Certificate, ClientBuilder};
use tracing::{info, warn};

use crate::config::EsConfig;
use crate::error::EsError;

/// Apply the certificate policy from `cfg`: trust only the CA bundle when
/// verifying, accept any certificate otherwise.
pub(crate) fn configure(builder: ClientBuilder, cfg: &EsConfig) -> Result<ClientBuilder, EsError> {
    if !cfg.verify_certs {
        warn!(target: "easylaw_es", "engine certificate verification disabled");
        return Ok(builder.danger_accept_invalid_certs(true));
    }
    let roots = load_ca_bundle(cfg)?;
    info!(target: "easylaw_es", roots = roots.len(), "verifying engine certificate");
    Ok(roots
        .into_iter()
        .fold(builder.tls_built_in_root_certs(false), ClientBuilder::add_root_certificate))
}

fn load_ca_bundle(cfg: &EsConfig) -> Result<Vec<Certificate>, EsError> {
    let path = cfg.ca_cert.as_ref().ok_or_else(|| {
        EsError::Tls("ELASTIC_VERIFY_CERTS is set but ELASTIC_CA_CERT is missing".to_string())
    })?;
    let f = File::open(path)
        .map_err(|e| EsError::Tls(format!("opening ca bundle '{}': {e}", path.display())))?;
    let mut reader = BufReader::new(f);
    let mut roots = Vec::new();
    for cert in rustls_pemfile::certs(&mut reader) {
        let cert = cert.map_err(|e| EsError::Tls(format!("reading ca bundle: {e}")))?;
        roots.push(Certificate::from_der(cert.as_ref()).map_err(|e| EsError::Tls(e.to_string()))?);
    }
    if roots.is_empty() {
        return Err(EsError::Tls(format!("no certificates found in {}", path.display())));
    }
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_without_ca_is_rejected() {
        let cfg = EsConfig { verify_certs: true, ca_cert: None, ..Default::default() };
        let err = configure(reqwest::Client::builder(), &cfg).expect_err("should need a ca bundle");
        assert!(err.to_string().contains("ELASTIC_CA_CERT"));
    }

    #[test]
    fn bundle_without_certificates_is_rejected() {
        let path = std::env::temp_dir().join(format!("easylaw-empty-ca-{}.pem", std::process::id()));
        std::fs::write(&path, "not a certificate\n").unwrap();
        let cfg = EsConfig { verify_certs: true, ca_cert: Some(path.clone()), ..Default::default() };
        let err = configure(reqwest::Client::builder(), &cfg).expect_err("empty bundle");
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("no certificates found"));
    }

    #[test]
    fn insecure_config_builds() {
        let builder = configure(reqwest::Client::builder(), &EsConfig::default()).unwrap();
        assert!(builder.build().is_ok());
    }
}
