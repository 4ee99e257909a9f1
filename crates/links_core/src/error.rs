use thiserror::Error;

/// Model-level misuse errors.
///
/// These indicate data that never legally enters the model (a par outside
/// 3-6) or a section reference built against the wrong venue. Absence of
/// optional data is never an error anywhere in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid par value: {0} (legal range is 3-6)")]
    InvalidPar(u8),

    #[error("section references group index {index}, but venue has {count} groups")]
    UnknownGroup { index: usize, count: usize },

    #[error("group '{name}' cannot be split into nines ({holes} holes, indivisible: {indivisible})")]
    NotSplittable { name: String, holes: usize, indivisible: bool },
}
