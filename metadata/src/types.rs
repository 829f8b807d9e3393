use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct QName {
    pub namespace: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Part {
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<QName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<QName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    pub name: String,

    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One direction of an operation.
///
/// `operation` names the binding operation owning the message and drives the
/// generated class names, while `message` is the abstract port type message
/// whose parts end up in the metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OperationMessage {
    pub operation: String,
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fault {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Operation {
    pub name: String,

    #[serde(default)]
    pub action: String,

    pub style: String,
    pub target_namespace: String,
    pub input: OperationMessage,
    pub output: OperationMessage,

    #[serde(default)]
    pub faults: Vec<Fault>,
}

/// A single port binding of a service, as offered by a parsed WSDL.
///
/// A service exposing several ports shows up as several of these, all sharing
/// the same `service` name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Service {
    pub service: String,
    pub port: String,
    pub address: String,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl QName {
    pub fn new<N: Into<String>, S: Into<String>>(namespace: N, name: S) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl Part {
    pub fn typed<S: Into<String>>(name: S, ty: QName) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            element: None,
        }
    }

    pub fn element<S: Into<String>>(name: S, element: QName) -> Self {
        Self {
            name: name.into(),
            ty: None,
            element: Some(element),
        }
    }
}
