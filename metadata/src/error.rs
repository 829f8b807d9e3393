use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Unable to find a host namespace associated with '{namespace}' XML namespace")]
    UnresolvedNamespace { namespace: String },
}
