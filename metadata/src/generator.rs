use log::{debug, trace, warn};
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use super::{
    error::Error,
    inflector::{camelize, classify},
    metadata::{Metadata, MessageMetadata, OperationMetadata, PortMetadata},
    naming::NamingStrategy,
    types::{Operation, OperationMessage, Part, QName, Service},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Sub-namespaces appended to a service's host namespace when building class
/// names for headers, parts and messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseNamespaces {
    pub headers: String,
    pub parts: String,
    pub messages: String,
}

pub struct MetadataGenerator<N> {
    naming: N,
    namespaces: HashMap<String, String>,
    alternative_endpoints: HashMap<String, HashMap<String, String>>,
    base_ns: BaseNamespaces,
    unwrap: bool,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.write_str("Input"),
            Direction::Output => f.write_str("Output"),
        }
    }
}

impl Default for BaseNamespaces {
    fn default() -> Self {
        Self {
            headers: "\\SoapEnvelope\\Headers".to_owned(),
            parts: "\\SoapEnvelope\\Parts".to_owned(),
            messages: "\\SoapEnvelope\\Messages".to_owned(),
        }
    }
}

impl BaseNamespaces {
    /// Overrides the suffix stored under `key`. Returns `false` and leaves
    /// everything untouched when `key` is not one of `headers`, `parts` or
    /// `messages`.
    pub fn set(&mut self, key: &str, namespace: String) -> bool {
        let slot = match key {
            "headers" => &mut self.headers,
            "parts" => &mut self.parts,
            "messages" => &mut self.messages,
            _ => return false,
        };

        *slot = namespace;
        true
    }
}

impl<N: NamingStrategy> MetadataGenerator<N> {
    /// `namespaces` maps XML target namespaces to host namespaces. Every
    /// namespace used by a generated operation must be present.
    pub fn new(naming: N, namespaces: HashMap<String, String>) -> Self {
        Self {
            naming,
            namespaces,
            alternative_endpoints: HashMap::new(),
            base_ns: BaseNamespaces::default(),
            unwrap: false,
        }
    }

    pub fn add_alternative_endpoint<S, P, E>(&mut self, service: S, port: P, endpoint: E)
    where
        S: Into<String>,
        P: Into<String>,
        E: Into<String>,
    {
        self.alternative_endpoints
            .entry(service.into())
            .or_default()
            .insert(port.into(), endpoint.into());
    }

    pub fn set_unwrap(&mut self, unwrap: bool) {
        self.unwrap = unwrap;
    }

    pub fn unwrap_enabled(&self) -> bool {
        self.unwrap
    }

    /// Partially overrides the base namespaces. Unknown keys are ignored.
    pub fn set_base_ns<I, K, V>(&mut self, base_ns: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, namespace) in base_ns {
            if !self.base_ns.set(key.as_ref(), namespace.into()) {
                debug!("Ignoring unknown base namespace key {}", key.as_ref());
            }
        }
    }

    pub fn base_ns(&self) -> &BaseNamespaces {
        &self.base_ns
    }

    /// Builds the metadata tree for every port in `services`.
    ///
    /// Later entries for the same service and port replace earlier ones. Any
    /// unresolved XML namespace aborts the whole call.
    pub fn generate(&self, services: &[Service]) -> Result<Metadata, Error> {
        let mut metadata = Metadata::new();

        for service in services {
            debug!("Generating metadata for {}/{}", service.service, service.port);

            let endpoint = self
                .alternative_endpoints
                .get(&service.service)
                .and_then(|ports| ports.get(&service.port))
                .unwrap_or(&service.address)
                .clone();

            let port = PortMetadata {
                operations: self.generate_operations(service)?,
                unwrap: self.unwrap,
                endpoint,
            };

            metadata
                .entry(service.service.clone())
                .or_default()
                .insert(service.port.clone(), port);
        }

        Ok(metadata)
    }

    fn generate_operations(
        &self,
        service: &Service,
    ) -> Result<BTreeMap<String, OperationMetadata>, Error> {
        let mut operations = BTreeMap::new();

        for operation in &service.operations {
            operations.insert(operation.name.clone(), self.generate_operation(operation)?);
        }

        Ok(operations)
    }

    fn generate_operation(&self, operation: &Operation) -> Result<OperationMetadata, Error> {
        trace!("Generating operation {}", operation.name);

        // Fault metadata is not derived, faults are only enumerated.
        for fault in &operation.faults {
            debug!(
                "Discarding fault {} of operation {}",
                fault.name, operation.name
            );
        }

        Ok(OperationMetadata {
            action: operation.action.clone(),
            style: operation.style.clone(),
            name: operation.name.clone(),
            method: camelize(&operation.name),
            input: self.generate_message(operation, &operation.input, Direction::Input)?,
            output: self.generate_message(operation, &operation.output, Direction::Output)?,
            fault: BTreeMap::new(),
        })
    }

    fn generate_message(
        &self,
        operation: &Operation,
        message: &OperationMessage,
        direction: Direction,
    ) -> Result<MessageMetadata, Error> {
        let ns = self.resolve_namespace(&operation.target_namespace)?;
        let class = classify(&message.operation);
        let fqcn = |base: &str| format!("{}{}\\{}{}", ns, base, class, direction);

        Ok(MessageMetadata {
            message_fqcn: fqcn(&self.base_ns.messages),
            headers_fqcn: fqcn(&self.base_ns.headers),
            part_fqcn: fqcn(&self.base_ns.parts),
            parts: self.generate_parts(&message.message.parts),
        })
    }

    fn resolve_namespace(&self, xml_namespace: &str) -> Result<&str, Error> {
        self.namespaces
            .get(xml_namespace)
            .map(String::as_str)
            .ok_or_else(|| Error::UnresolvedNamespace {
                namespace: xml_namespace.to_owned(),
            })
    }

    fn generate_parts(&self, parts: &[Part]) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        let no_element = QName::default();

        for part in parts {
            let property = self.naming.property_name(part);

            let name = match (&part.ty, &part.element) {
                (Some(ty), _) => self.naming.type_name(ty),
                (None, Some(element)) => self.naming.item_name(element),
                (None, None) => {
                    warn!("Part {} has neither a type nor an element", part.name);
                    self.naming.item_name(&no_element)
                }
            };

            if let Some(previous) = result.insert(property.clone(), name) {
                warn!("Part {} replaces {} under property {}", part.name, previous, property);
            }
        }

        result
    }
}
