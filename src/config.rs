//! Codec configuration.
//!
//! Encoder and decoder must agree on the configuration: the tree is rebuilt
//! from the frequency table on the decode side, and the tie-break rule
//! decides its shape whenever weights are equal.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Secondary ordering key for leaves of equal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TieBreak {
    /// Lower byte value is combined first.
    #[default]
    SymbolValue,
    /// Earlier first appearance in the frequency table is combined first.
    InsertionOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodecConfig {
    pub tie_break: TieBreak,
    /// Check the decoded length against the recorded original length.
    pub verify_length: bool,
}

impl CodecConfig {
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_verify_length(mut self, verify_length: bool) -> Self {
        self.verify_length = verify_length;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            tie_break: TieBreak::SymbolValue,
            verify_length: true,
        }
    }
}
