//! Response models for Quay's repository metadata endpoints.
//!
//! These mirror the JSON the service returns. Fields Quay omits for some
//! repositories (expired tags, manifest lists, unscanned images) are
//! `Option` with serde defaults, so a partial payload still deserializes.

use serde::{Deserialize, Serialize};

/// A named pointer to an image manifest within a repository.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub reversion: bool,
    #[serde(default)]
    pub start_ts: Option<i64>,
    #[serde(default)]
    pub end_ts: Option<i64>,
    #[serde(default)]
    pub manifest_digest: Option<String>,
    #[serde(default)]
    pub is_manifest_list: Option<bool>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub expiration: Option<String>,
}

/// One page of tags, with pagination metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub has_additional: Option<bool>,
}

/// A key/value annotation attached to a manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Label {
    pub id: String,
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabelsResponse {
    pub labels: Vec<Label>,
}

/// One layer entry of a manifest, as Quay reports it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ManifestLayer {
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub compressed_size: Option<u64>,
    #[serde(default)]
    pub is_remote: Option<bool>,
    #[serde(default)]
    pub urls: Option<Vec<String>>,
    #[serde(default)]
    pub command: Option<Vec<String>>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub blob_digest: Option<String>,
    #[serde(default)]
    pub created_datetime: Option<String>,
}

/// A manifest addressed by digest.
///
/// `manifest_data` is the raw manifest document as JSON text; Quay does not
/// expand it server-side and neither does this client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ManifestByDigestResponse {
    pub digest: String,
    #[serde(default)]
    pub is_manifest_list: bool,
    #[serde(default)]
    pub manifest_data: Option<String>,
    #[serde(default)]
    pub config_media_type: Option<String>,
    #[serde(default)]
    pub layers: Option<Vec<ManifestLayer>>,
    #[serde(default)]
    pub layers_compressed_size: Option<u64>,
}

/// Overall state of the vulnerability scan for a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Unsupported,
    Unscanned,
    Scanning,
    Scanned,
    Failed,
    Queued,
}

/// Vulnerability scan report for a manifest digest.
///
/// `data` is present only once `status` is `scanned`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityDetailsResponse {
    pub status: ScanStatus,
    #[serde(default)]
    pub data: Option<ScanData>,
}

/// The scanner's report payload. Field names are PascalCase on the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanData {
    #[serde(rename = "Layer")]
    pub layer: ScanLayer,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanLayer {
    pub name: String,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub namespace_name: Option<String>,
    #[serde(default)]
    pub indexed_by_version: Option<u32>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A package the scanner detected in the image, with any vulnerabilities
/// affecting it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub version_format: Option<String>,
    #[serde(default)]
    pub namespace_name: Option<String>,
    #[serde(default)]
    pub added_by: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub base_scores: Vec<f64>,
    #[serde(default, rename = "CVEIds")]
    pub cve_ids: Vec<String>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vulnerability {
    pub name: String,
    #[serde(default)]
    pub namespace_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub fixed_by: Option<String>,
    #[serde(default)]
    pub metadata: Option<VulnerabilityMetadata>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VulnerabilityMetadata {
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub repo_name: Option<String>,
    #[serde(default)]
    pub repo_link: Option<String>,
    #[serde(default)]
    pub distro_name: Option<String>,
    #[serde(default)]
    pub distro_version: Option<String>,
    #[serde(default, rename = "NVD")]
    pub nvd: Option<Nvd>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Nvd {
    #[serde(default, rename = "CVSSv3")]
    pub cvss_v3: Option<CvssV3>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CvssV3 {
    #[serde(default)]
    pub vectors: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}
