//! Standard genetic code over mRNA codons.

/// Marker residue for the three stop codons.
pub const STOP: &str = "Stop";
/// Residue reported for a codon outside the table.
pub const UNKNOWN_RESIDUE: &str = "Unk";

/// Codon to three-letter amino acid, in UCAG order.
#[rustfmt::skip]
pub const CODON_TABLE: [(&str, &str); 64] = [
    ("UUU", "Phe"), ("UUC", "Phe"), ("UUA", "Leu"), ("UUG", "Leu"),
    ("UCU", "Ser"), ("UCC", "Ser"), ("UCA", "Ser"), ("UCG", "Ser"),
    ("UAU", "Tyr"), ("UAC", "Tyr"), ("UAA", STOP), ("UAG", STOP),
    ("UGU", "Cys"), ("UGC", "Cys"), ("UGA", STOP), ("UGG", "Trp"),
    ("CUU", "Leu"), ("CUC", "Leu"), ("CUA", "Leu"), ("CUG", "Leu"),
    ("CCU", "Pro"), ("CCC", "Pro"), ("CCA", "Pro"), ("CCG", "Pro"),
    ("CAU", "His"), ("CAC", "His"), ("CAA", "Gln"), ("CAG", "Gln"),
    ("CGU", "Arg"), ("CGC", "Arg"), ("CGA", "Arg"), ("CGG", "Arg"),
    ("AUU", "Ile"), ("AUC", "Ile"), ("AUA", "Ile"), ("AUG", "Met"),
    ("ACU", "Thr"), ("ACC", "Thr"), ("ACA", "Thr"), ("ACG", "Thr"),
    ("AAU", "Asn"), ("AAC", "Asn"), ("AAA", "Lys"), ("AAG", "Lys"),
    ("AGU", "Ser"), ("AGC", "Ser"), ("AGA", "Arg"), ("AGG", "Arg"),
    ("GUU", "Val"), ("GUC", "Val"), ("GUA", "Val"), ("GUG", "Val"),
    ("GCU", "Ala"), ("GCC", "Ala"), ("GCA", "Ala"), ("GCG", "Ala"),
    ("GAU", "Asp"), ("GAC", "Asp"), ("GAA", "Glu"), ("GAG", "Glu"),
    ("GGU", "Gly"), ("GGC", "Gly"), ("GGA", "Gly"), ("GGG", "Gly"),
];

/// Residue for one codon; [`UNKNOWN_RESIDUE`] when it is not in the table.
pub fn residue(codon: &str) -> &'static str {
    CODON_TABLE
        .iter()
        .find(|(c, _)| *c == codon)
        .map_or(UNKNOWN_RESIDUE, |&(_, r)| r)
}
