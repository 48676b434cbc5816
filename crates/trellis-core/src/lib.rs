// crates/trellis-core/src/lib.rs
pub mod node;
pub mod tree;

pub use node::*;
pub use tree::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrellisError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Tree has no root node")]
    MissingRoot,

    #[error("Tree already has a root node: {0}")]
    RootExists(NodeId),
}

pub type Result<T> = std::result::Result<T, TrellisError>;
