use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use ssh_keypair::{generate_rsa_key_pair, load_rsa_key_pair, verify_key_pair};
use tracing_subscriber::EnvFilter;

/// Generate an RSA key pair for SSH access.
#[derive(Parser, Debug)]
#[command(name = "keygen")]
struct Args {
    /// Key size in bits
    #[arg(long, default_value_t = 4096)]
    bits: usize,

    /// Where to write the authorized-keys line
    #[arg(long, default_value = "id_rsa.pub")]
    public_key: PathBuf,

    /// Where to write the PEM private key
    #[arg(long, default_value = "id_rsa")]
    private_key: PathBuf,

    /// Print the pair as JSON instead of writing files
    #[arg(long, conflicts_with = "verify")]
    json: bool,

    /// Check that the existing files hold a matching pair instead of generating
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.verify {
        let pair = load_rsa_key_pair(&args.public_key, &args.private_key)?;
        if verify_key_pair(&pair)? {
            println!("Key pair matches");
            return Ok(());
        }
        return Err(format!(
            "{} does not match {}",
            args.public_key.display(),
            args.private_key.display()
        )
        .into());
    }

    let pair = generate_rsa_key_pair(args.bits)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&pair)?);
        return Ok(());
    }

    write_private_key(&args.private_key, pair.private_key())?;
    println!("Private key saved to {}", args.private_key.display());

    fs::write(&args.public_key, pair.public_key())?;
    println!("Public key saved to {}", args.public_key.display());

    Ok(())
}

// Private keys must end up owner-only, even when overwriting an existing
// file; ssh refuses group/world readable ones.
fn write_private_key(path: &Path, pem: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(pem.as_bytes())
}
