use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use meshmac_core::{KeyPair, IV_LEN, KEY_LEN};
use meshmac_math::GfSymbol;
use meshmac_tag::{combine, mac, verify};
use rand::RngCore;

#[derive(Parser)]
#[command(name = "meshmac", about = "Homomorphic tags for network-coded vectors")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Compute the tag of a vector (hex, n payload + m coded symbols).
    Tag {
        #[arg(long)] k1: String,
        #[arg(long)] k2: String,
        #[arg(long)] id: u16,
        #[arg(long)] n: u16,
        #[arg(long)] m: u16,
        #[arg(long)] iv: String,
        vector: String,
    },
    /// Recompute the tag and compare against a claimed one.
    Verify {
        #[arg(long)] k1: String,
        #[arg(long)] k2: String,
        #[arg(long)] id: u16,
        #[arg(long)] n: u16,
        #[arg(long)] m: u16,
        #[arg(long)] iv: String,
        #[arg(long)] tag: String,
        vector: String,
    },
    /// Mix tags under coding coefficients. Needs no key material.
    Combine {
        #[arg(long)] tags: String,
        #[arg(long)] alphas: String,
    },
    /// Relay demo: tag a generation, mix it, cross-check the combined tag.
    Mix {
        #[arg(long, default_value_t = 4)] n: u16,
        #[arg(long, default_value_t = 3)] m: u16,
        #[arg(long, default_value_t = 7)] id: u16,
    },
}

fn parse_hex(label: &str, s: &str) -> Result<Vec<u8>> {
    hex::decode(s).with_context(|| format!("{} is not valid hex", label))
}

fn parse_symbols(label: &str, s: &str) -> Result<Vec<GfSymbol>> {
    Ok(parse_hex(label, s)?.into_iter().map(GfSymbol).collect())
}

fn parse_iv(s: &str) -> Result<[u8; IV_LEN]> {
    let bytes = parse_hex("iv", s)?;
    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("iv must be exactly {} bytes", IV_LEN))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Tag { k1, k2, id, n, m, iv, vector } => {
            let k1 = parse_hex("k1", &k1)?;
            let k2 = parse_hex("k2", &k2)?;
            let iv = parse_iv(&iv)?;
            let y = parse_symbols("vector", &vector)?;
            let t = mac(&k1, &k2, id, n, m, &y, &iv)?;
            println!("{:02x}", t.0);
        }
        Cmd::Verify { k1, k2, id, n, m, iv, tag, vector } => {
            let k1 = parse_hex("k1", &k1)?;
            let k2 = parse_hex("k2", &k2)?;
            let iv = parse_iv(&iv)?;
            let y = parse_symbols("vector", &vector)?;
            let claimed = parse_symbols("tag", &tag)?;
            if claimed.len() != 1 {
                bail!("tag must be a single hex byte");
            }
            if verify(&k1, &k2, id, n, m, &y, &iv, claimed[0])? {
                println!("OK");
            } else {
                println!("MISMATCH");
                std::process::exit(1);
            }
        }
        Cmd::Combine { tags, alphas } => {
            let tags = parse_symbols("tags", &tags)?;
            let alphas = parse_symbols("alphas", &alphas)?;
            let t = combine(&tags, &alphas)?;
            println!("{:02x}", t.0);
        }
        Cmd::Mix { n, m, id } => run_mix(n, m, id)?,
    }
    Ok(())
}

/// Simulates one hop of a coded mesh: a source tags the basis vectors of a
/// generation, a relay mixes them without the keys, and the sink checks the
/// combined tag against a fresh computation.
fn run_mix(n: u16, m: u16, id: u16) -> Result<()> {
    let mut rng = rand::thread_rng();

    let mut k1 = [0u8; KEY_LEN];
    let mut k2 = [0u8; KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    rng.fill_bytes(&mut k1);
    rng.fill_bytes(&mut k2);
    rng.fill_bytes(&mut iv);
    let keys = KeyPair::new(k1, k2);

    let len = usize::from(n) + usize::from(m);
    info!("generation: n={} m={} id={}", n, m, id);

    // Source: random payloads, unit coded coordinates.
    let mut basis = Vec::new();
    let mut tags = Vec::new();
    for j in 0..usize::from(m) {
        let mut y = vec![GfSymbol::ZERO; len];
        for k in 0..usize::from(n) {
            let mut b = [0u8; 1];
            rng.fill_bytes(&mut b);
            y[k] = GfSymbol(b[0]);
        }
        y[usize::from(n) + j] = GfSymbol::ONE;
        let t = mac(&keys.prg, &keys.prf, id, n, m, &y, &iv)?;
        info!("basis vector {} tagged: {:02x}", j, t.0);
        basis.push(y);
        tags.push(t);
    }

    // Relay: random coefficients, no keys.
    let mut alphas = vec![0u8; basis.len()];
    rng.fill_bytes(&mut alphas);
    let alphas: Vec<GfSymbol> = alphas.into_iter().map(GfSymbol).collect();

    let mut z = vec![GfSymbol::ZERO; len];
    for (y, &a) in basis.iter().zip(&alphas) {
        for (zk, &yk) in z.iter_mut().zip(y) {
            *zk = *zk + a * yk;
        }
    }
    let combined = combine(&tags, &alphas)?;
    info!("relay emitted combined tag {:02x}", combined.0);

    // Sink: the combined tag must match a keyed recomputation.
    if !verify(&keys.prg, &keys.prf, id, n, m, &z, &iv, combined)? {
        bail!("combined tag failed verification");
    }
    println!("combined tag {:02x} verified over {} basis vectors", combined.0, m);
    Ok(())
}
