use clap::Parser;
use std::path::PathBuf;

/// Signs a device signature into a license certificate, or verifies an
/// existing certificate against a public key.
#[derive(Debug, Parser)]
#[command(
    name = "signature-tool",
    version,
    about = "Usage: [-p path_to_signature_generator] [-s device_signature] -k key -n license_file"
)]
pub struct Opts {
    /// Path to the android device-signature generator
    #[arg(short = 'p', long = "signature-generator")]
    pub signature_generator: Option<PathBuf>,

    /// Device signature (overrides the generator)
    #[arg(short = 's', long = "signature")]
    pub signature: Option<String>,

    /// Path to the private key file
    #[arg(short = 'k', long = "private-key")]
    pub private_key: Option<PathBuf>,

    /// Path to the license file to write
    #[arg(short = 'n', long = "license-file")]
    pub license_file: Option<PathBuf>,

    /// Verify a certificate instead of issuing one
    #[arg(short = 'v', long = "verify")]
    pub verify: bool,

    /// Certificate to verify (with -v)
    #[arg(short = 'c', long = "certificate")]
    pub certificate: Option<String>,

    /// Path to the public key file
    #[arg(long = "public-key")]
    pub public_key: Option<PathBuf>,
}
