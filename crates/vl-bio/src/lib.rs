//! vl-bio: the gene expression bench.
//!
//! Contains:
//! - codon (the standard RNA codon table)
//! - expression (DNA to mRNA transcription and mRNA to protein translation)

pub mod codon;
pub mod expression;

pub use codon::{CODON_TABLE, STOP, UNKNOWN_RESIDUE, residue};
pub use expression::{
    DEFAULT_DNA, Expression, GeneticsError, GeneticsResult, RESIDUE_SEPARATOR, express,
    transcribe, translate,
};
