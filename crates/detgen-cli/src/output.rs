//! Report printing and the `.dat` side file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use detgen_core::records::{self, DatRecord};
use detgen_core::{Det, HhitSuite, Hid, HostIdentity};

/// Everything the report prints, borrowed from the derivation.
pub struct Report<'a> {
    pub det: &'a Det,
    pub suite: HhitSuite,
    pub hid: Hid,
    pub hi: &'a HostIdentity,
    pub spki_der: &'a [u8],
    pub keyname: &'a str,
    pub passwd_set: bool,
}

/// Print the derivation report: parameter echo, then each published
/// artifact on its own labeled line.
///
/// # Errors
///
/// Returns an error if the SPKI DER has the wrong shape for a TLSA record.
pub fn print_report(report: &Report<'_>) -> Result<()> {
    println!("Using the following values for DET generation:");
    println!("KEY file: {}", report.keyname);
    println!(
        "KEY PASSWORD: {}",
        if report.passwd_set { "(set)" } else { "(none)" }
    );
    println!("HHIT Suite ID: {}", report.suite.oga_id());
    println!("RAA: {}", report.hid.raa);
    println!("HDA: {}", report.hid.hda);

    println!("PK DER: {}", hex::encode(report.spki_der));
    println!("TLSA RR: {}", records::tlsa_rr(report.spki_der)?);
    println!("Raw HI: {}", report.hi.to_hex());
    println!("DET: {}", report.det.to_hex());
    println!(
        "HIP RR: {}",
        records::hip_rr(report.det, report.suite, report.hi)
    );
    println!("DET: {}", report.det.to_colon_hex());
    println!("FQDN: {}", records::fqdn(report.det, report.suite, report.hid));
    println!("Reverse: {}", report.det.to_reverse_name());

    Ok(())
}

/// Write `<key label>.dat` under `dir` and return its path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_dat(dir: &Path, record: &DatRecord) -> Result<PathBuf> {
    let path = dir.join(format!("{}.dat", record.key_label));
    fs::write(&path, record.render())
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), "wrote DET record file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DatRecord {
        let hi = HostIdentity::from_public_key(&[0x42u8; 32]);
        let det = Det::derive(Hid::new(16376, 20), HhitSuite::Ed25519CShake128, &hi).unwrap();
        DatRecord {
            det,
            host_identity: hi,
            key_label: "keyfile".to_string(),
        }
    }

    #[test]
    fn test_write_dat_content() {
        let dir = tempfile::tempdir().unwrap();
        let record = sample_record();

        let path = write_dat(dir.path(), &record).unwrap();
        assert_eq!(path, dir.path().join("keyfile.dat"));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, record.render());
        assert!(written.starts_with("DETofC=0x2001003ffe001405ab49214ae322f953\n"));
    }

    #[test]
    fn test_write_dat_label_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = sample_record();
        record.key_label = "uav7".to_string();

        let path = write_dat(dir.path(), &record).unwrap();
        assert_eq!(path, dir.path().join("uav7.dat"));
    }
}
