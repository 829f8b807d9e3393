use serde::Serialize;
use std::collections::BTreeMap;

/// Service name -> port name -> port metadata.
pub type Metadata = BTreeMap<String, BTreeMap<String, PortMetadata>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortMetadata {
    pub operations: BTreeMap<String, OperationMetadata>,
    pub unwrap: bool,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationMetadata {
    pub action: String,
    pub style: String,
    pub name: String,
    pub method: String,
    pub input: MessageMetadata,
    pub output: MessageMetadata,

    /// Fault metadata is not derived yet, this is always empty.
    pub fault: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageMetadata {
    pub message_fqcn: String,
    pub headers_fqcn: String,
    pub part_fqcn: String,

    /// Property name -> type or item name.
    pub parts: BTreeMap<String, String>,
}
