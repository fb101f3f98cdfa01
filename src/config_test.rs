use std::collections::HashMap;

use client::net::config::DEFAULT_API_URL;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api.base_url(), DEFAULT_API_URL);
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "8081"), ("SAGE_API_URL", "https://api.sage.test/")])).unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.api.base_url(), "https://api.sage.test");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("SAGE_API_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api.base_url(), DEFAULT_API_URL);
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { var: "PORT", value: "http".to_owned() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(HostConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
