//! detgen CLI
//!
//! Derives a DRIP Entity Tag from an ed25519 keypair and prints every
//! artifact needed to publish it: public key DER, TLSA RR, raw Host
//! Identity, DET (hex and colon forms), HIP RR, registration FQDN, and
//! the ip6.arpa reverse name. A `<keyname>.dat` record is written next
//! to the key files.

mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use zeroize::Zeroizing;

use detgen_core::records::DatRecord;
use detgen_core::{Det, HhitSuite, Hid, HostIdentity};
use detgen_keys::KeyFileSet;

use output::Report;

/// detgen - derive a DRIP Entity Tag and its DNS records from an ed25519 key
#[derive(Parser)]
#[command(name = "detgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base name for the key file set (<name>prv.pem, <name>pub.pem, <name>pub.der)
    #[arg(short = 'n', long, default_value = "keyfile")]
    keyname: String,

    /// Passphrase for the private key PEM (empty writes unencrypted PKCS#8)
    #[arg(short = 'p', long, default_value = "")]
    passwd: String,

    /// HHIT suite identifier
    #[arg(long, value_name = "ID", default_value_t = 5)]
    suite_id: u8,

    /// Registered Assigning Authority (14 bits)
    #[arg(long, default_value_t = 16376)]
    raa: u16,

    /// HHIT Domain Authority (14 bits)
    #[arg(long, default_value_t = 20)]
    hda: u16,

    /// Generate a new keypair instead of loading <keyname>prv.pem
    #[arg(short, long)]
    generate: bool,

    /// Directory for key files and the .dat record
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output (implies --verbose)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt().with_env_filter(log_level).init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    println!("DET Gen Version: {}", env!("CARGO_PKG_VERSION"));

    let suite = HhitSuite::from_oga_id(cli.suite_id)
        .with_context(|| format!("unknown HHIT suite id {}", cli.suite_id))?;
    let hid = Hid::new(cli.raa, cli.hda);
    // Reject an unusable hierarchy before any key file is touched
    hid.validate()?;

    let passwd = Zeroizing::new(cli.passwd);
    let files = KeyFileSet::new(&cli.dir, &cli.keyname);

    let signing_key = if cli.generate {
        debug!(keyname = %cli.keyname, "generating new ed25519 keypair");
        let key = detgen_keys::generate();
        detgen_keys::save_keypair(&cli.dir, &cli.keyname, &key, &passwd)?;
        key
    } else {
        detgen_keys::load_signing_key(&files.private_pem, &passwd).with_context(|| {
            format!(
                "failed to load {} (use --generate to create a new keypair)",
                files.private_pem.display()
            )
        })?
    };

    let verifying = signing_key.verifying_key();
    let spki_der = detgen_keys::public_key_der(&verifying)?;
    let hi = HostIdentity::from_public_key(verifying.as_bytes());
    let det = Det::derive(hid, suite, &hi)?;
    debug!(det = %det.to_hex(), "derived DET");

    output::print_report(&Report {
        det: &det,
        suite,
        hid,
        hi: &hi,
        spki_der: &spki_der,
        keyname: &cli.keyname,
        passwd_set: !passwd.is_empty(),
    })?;

    let record = DatRecord {
        det,
        host_identity: hi,
        key_label: cli.keyname.clone(),
    };
    let path = output::write_dat(&cli.dir, &record)?;
    debug!(path = %path.display(), "wrote DET record");

    Ok(())
}
