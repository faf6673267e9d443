//! `signature-tool`: issues and verifies device-bound license certificates
//!
//! Issuance signs the device signature with the private key, re-verifies
//! the fresh certificate when a public key is at hand, and persists it
//! into the JSON license descriptor. Verify-only mode (`-v`) checks an
//! existing certificate and reports through the exit code.

use std::fs;
use std::path::Path;
use std::process::{Command, ExitCode};

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use licrypt_api::{Error, Result};
use licrypt_license::store_certificate;
use licrypt_sign::{check_sign, sign_message};

mod cmdopts;
use cmdopts::Opts;

/// First whitespace-delimited token of a key file
fn read_key_file(path: &Path, what: &'static str) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|err| Error::Io {
        context: what,
        message: format!("{}: {}", path.display(), err),
    })?;
    contents
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidParameter {
            context: what,
            message: format!("{} is empty", path.display()),
        })
}

/// Run the external generator and take its trimmed stdout as the device
/// signature
fn generator_signature(generator: &Path) -> Result<String> {
    info!("getting android device signature...");
    let output = Command::new(generator).output().map_err(|err| Error::Io {
        context: "signature generator",
        message: format!("{}: {}", generator.display(), err),
    })?;
    if !output.status.success() {
        return Err(Error::Io {
            context: "signature generator",
            message: format!("{} exited with {}", generator.display(), output.status),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Linux device-signature probe. The probing binary ships outside this
/// tool, so the fallback surfaces as an error instead of a signature.
fn linux_signature() -> Result<String> {
    info!("signature generator not specified, getting linux device signature...");
    Err(Error::Io {
        context: "device signature",
        message: "no linux signature probe is available on this host".to_string(),
    })
}

fn device_signature(opts: &Opts) -> Result<String> {
    let signature = match (&opts.signature, &opts.signature_generator) {
        (Some(signature), _) => signature.clone(),
        (None, Some(generator)) => generator_signature(generator)?,
        (None, None) => linux_signature()?,
    };
    if signature.is_empty() {
        return Err(Error::InvalidParameter {
            context: "device signature",
            message: "device signature is empty".to_string(),
        });
    }
    Ok(signature)
}

fn run_verify(opts: &Opts, public_key: &str) -> Result<ExitCode> {
    let signature = opts.signature.as_deref().ok_or(Error::InvalidParameter {
        context: "verify",
        message: "specify the device signature (-s)".to_string(),
    })?;
    let certificate = opts.certificate.as_deref().ok_or(Error::InvalidParameter {
        context: "verify",
        message: "specify the certificate (-c)".to_string(),
    })?;
    if public_key.is_empty() {
        return Err(Error::InvalidParameter {
            context: "verify",
            message: "specify the public key file (--public-key)".to_string(),
        });
    }

    let matched = check_sign(signature, certificate, public_key)?;
    info!(
        "verify certificate: {}",
        if matched { "OK" } else { "failed" }
    );
    Ok(if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_issue(opts: &Opts, public_key: &str) -> Result<ExitCode> {
    let signature = device_signature(opts)?;
    info!("device signature: {}", signature);

    let (private_key_file, license_file) = match (&opts.private_key, &opts.license_file) {
        (Some(key), Some(license)) => (key, license),
        _ => {
            return Err(Error::InvalidParameter {
                context: "issue",
                message: "specify the private key (-k) and the license file (-n)".to_string(),
            })
        }
    };

    let private_key = read_key_file(private_key_file, "private key file")?;
    let certificate = sign_message(&signature, &private_key)?;
    info!("certificate = {}", certificate);

    // round-trip check of the fresh certificate when a public key is given
    if !public_key.is_empty() {
        let matched = check_sign(&signature, &certificate, public_key)?;
        info!(
            "verify certificate: {}",
            if matched { "OK" } else { "failed" }
        );
        if !matched {
            return Ok(ExitCode::FAILURE);
        }
    }

    match store_certificate(license_file, &certificate) {
        Ok(()) => {
            info!("certificate saving status: OK");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("cannot write license to {}: {}", license_file.display(), err);
            info!("certificate saving status: Failed");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(opts: &Opts) -> Result<ExitCode> {
    let public_key = match &opts.public_key {
        Some(path) => read_key_file(path, "public key file")?,
        None => String::new(),
    };

    if opts.verify {
        run_verify(opts, &public_key)
    } else {
        run_issue(opts, &public_key)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    match run(&opts) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
