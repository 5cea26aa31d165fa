//! Reading sequences from FASTA files.

use std::path::Path;

/// Reads the IDs and sequences of a FASTA file, in file order.
///
/// # Errors
///
/// - If the file cannot be opened or a record cannot be parsed.
/// - If a record has an empty ID.
/// - If a sequence is not valid UTF-8.
pub fn read<P: AsRef<Path> + core::fmt::Debug>(path: P) -> Result<(Vec<String>, Vec<String>), String> {
    let records = bio::io::fasta::Reader::from_file(path)
        .map_err(|e| e.to_string())?
        .records();

    let (mut ids, mut seqs) = (Vec::new(), Vec::new());
    for record in records {
        let record = record.map_err(|e| e.to_string())?;
        if record.id().is_empty() {
            return Err(format!("Empty ID for record {}.", seqs.len()));
        }
        let seq = String::from_utf8(record.seq().to_vec()).map_err(|e| e.to_string())?;
        ids.push(record.id().to_string());
        seqs.push(seq);
    }

    ftlog::info!("Read {} sequences from FASTA file.", seqs.len());

    Ok((ids, seqs))
}
