//! End-to-end tests for building configurations and making them servable.

use std::io::Write;
use std::path::Path;

use igvr::resources::ProviderError;
use igvr::{Config, Error, Resource, ResourceProvider, ResourceSession, Track};
use serde_json::json;

/// Issues localhost URLs without any actual file serving.
struct StubProvider {
    issued: usize,
}

impl ResourceProvider for StubProvider {
    fn create(&mut self, _path: &Path) -> Result<Resource, ProviderError> {
        let url = format!("http://localhost:9876/resources/{}", self.issued);
        self.issued += 1;
        Ok(Resource { url })
    }
}

fn session() -> ResourceSession {
    ResourceSession::new(Box::new(StubProvider { issued: 0 }))
}

fn temp_data_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".bam").tempfile().unwrap();
    file.write_all(b"data").unwrap();
    file
}

#[test]
fn test_servable_rewrites_local_urls_only() {
    let data = temp_data_file();
    let local = data.path().to_str().unwrap();

    let config = Config::from_value(&json!({
        "genome": "hg38",
        "tracks": [
            {"name": "local", "url": local, "format": "bam"},
            {"name": "remote", "url": "https://example.com/b.bam", "format": "bam"},
        ],
    }))
    .unwrap();

    let mut session = session();
    let servable = config.servable(&mut session).unwrap();

    let Track::Alignment(rewritten) = &servable.tracks[0] else {
        panic!("expected alignment track");
    };
    assert_eq!(rewritten.url, "http://localhost:9876/resources/0");

    let Track::Alignment(remote) = &servable.tracks[1] else {
        panic!("expected alignment track");
    };
    assert_eq!(remote.url, "https://example.com/b.bam");

    // Everything except the url leaves is preserved verbatim.
    assert_eq!(servable.genome, config.genome);
    assert_eq!(rewritten.name, "local");
    assert_eq!(rewritten.format.as_deref(), Some("bam"));

    // The original configuration is untouched.
    let Track::Alignment(original) = &config.tracks[0] else {
        panic!("expected alignment track");
    };
    assert_eq!(original.url, local);
    assert_eq!(session.resources().len(), 1);
}

#[test]
fn test_servable_rewrites_index_urls() {
    let data = temp_data_file();
    let index = temp_data_file();

    let config = Config::from_value(&json!({
        "tracks": [{
            "name": "reads",
            "url": data.path().to_str().unwrap(),
            "indexURL": index.path().to_str().unwrap(),
            "format": "bam",
        }],
    }))
    .unwrap();

    let servable = config.servable(&mut session()).unwrap();
    let Track::Alignment(track) = &servable.tracks[0] else {
        panic!("expected alignment track");
    };
    assert_eq!(track.url, "http://localhost:9876/resources/0");
    assert_eq!(
        track.index_url.as_deref(),
        Some("http://localhost:9876/resources/1")
    );
}

#[test]
fn test_servable_recurses_into_merged_children() {
    let data = temp_data_file();
    let local = data.path().to_str().unwrap();

    let config = Config::from_value(&json!({
        "tracks": [{
            "name": "overlay",
            "type": "merged",
            "tracks": [
                {"name": "local", "url": local, "format": "bigWig"},
                {"name": "remote", "url": "https://example.com/b.bw"},
            ],
        }],
    }))
    .unwrap();

    let servable = config.servable(&mut session()).unwrap();
    let Track::Merged(merged) = &servable.tracks[0] else {
        panic!("expected merged track");
    };
    assert_eq!(merged.tracks[0].url, "http://localhost:9876/resources/0");
    assert_eq!(merged.tracks[1].url, "https://example.com/b.bw");

    let Track::Merged(original) = &config.tracks[0] else {
        panic!("expected merged track");
    };
    assert_eq!(original.tracks[0].url, local);
}

#[test]
fn test_servable_is_idempotent_over_provider_urls() {
    let data = temp_data_file();

    let config = Config::from_value(&json!({
        "tracks": [{"name": "reads", "url": data.path().to_str().unwrap(), "format": "bam"}],
    }))
    .unwrap();

    let mut session = session();
    let first = config.servable(&mut session).unwrap();
    let second = first.servable(&mut session).unwrap();

    // Provider URLs are remote on the second pass; nothing new is issued.
    assert_eq!(second, first);
    assert_eq!(session.resources().len(), 1);
}

#[test]
fn test_servable_with_missing_file_fails_and_preserves_original() {
    let config = Config::from_value(&json!({
        "tracks": [{"name": "reads", "url": "/no/such/file.bam"}],
    }))
    .unwrap();
    let before = config.clone();

    let err = config.servable(&mut session()).unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
    assert_eq!(config, before);
}

#[test]
fn test_full_json_round_trip() {
    let json = r#"{
        "genome": "hg38",
        "locus": "chr8:127,736,588-127,739,371",
        "tracks": [
            {
                "name": "HG00103",
                "url": "https://example.com/NA12878.cram",
                "indexURL": "https://example.com/NA12878.cram.crai",
                "format": "cram"
            },
            {
                "name": "genes",
                "url": "https://example.com/genes.bed.gz",
                "displayMode": "COLLAPSED"
            }
        ]
    }"#;

    let config = Config::from_json(json).unwrap();
    assert!(matches!(config.tracks[0], Track::Alignment(_)));
    assert!(matches!(config.tracks[1], Track::Annotation(_)));

    let serialized = serde_json::to_string(&config).unwrap();
    let rebuilt = Config::from_json(&serialized).unwrap();
    assert_eq!(rebuilt, config);
}

#[test]
fn test_empty_configuration_builds() {
    let config = Config::from_value(&json!({})).unwrap();
    assert!(config.tracks.is_empty());
    assert!(config.genome.is_none());
}
