//! sui-tx: offline inspection of Sui transactions, signatures and keys
//!
//! ## Example Usage
//!
//! ```bash
//! # Decode a signed transaction to JSON
//! sui-tx decode --as signed AAAAAAD3xs2K...
//!
//! # Check the signature of a signed transaction
//! sui-tx verify AAAAAAD3xs2K...
//!
//! # Derive an address from `flag ‖ public key`
//! sui-tx address ACO/Nk+bHim8j+NOcwAZ34gcnIAevFUl4nKZRbbQmJ0Z
//! ```
//!
//! Decoder strictness follows the `SUI_TX_*` environment variables.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use sui_tx_sdk::{
    BcsDecode, CodecConfig, Deserializer, IntentMessage, PublicKey, SenderSignedData,
    SuiKeyPair, TransactionData, TransactionKind,
};
use sui_tx_types::encoding::base64_decode;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum DecodeAs {
    /// SenderSignedData
    Signed,
    /// TransactionData
    TxData,
    /// IntentMessage
    IntentMessage,
    /// TransactionKind
    Kind,
}

#[derive(Parser)]
#[command(
    name = "sui-tx",
    author,
    version,
    about = "Decode, verify and inspect Sui transactions offline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode base64 wire bytes and print them as JSON
    Decode {
        /// Type to decode the bytes as
        #[arg(long = "as", value_enum, default_value_t = DecodeAs::Signed)]
        kind: DecodeAs,
        /// Base64-encoded bytes
        data: String,
    },

    /// Verify a base64-encoded SenderSignedData
    Verify {
        /// Base64-encoded SenderSignedData
        data: String,
    },

    /// Derive the Sui address of a base64 `flag ‖ public key`
    Address {
        /// Base64-encoded flagged public key
        public_key: String,
    },

    /// Show the public half of a base64 keypair
    KeypairInfo {
        /// Base64-encoded `flag ‖ public key ‖ private key`
        keypair: String,
    },
}

#[derive(Serialize)]
struct VerifyReport {
    digest: String,
    sender: String,
    scheme: String,
    valid: bool,
}

#[derive(Serialize)]
struct KeyReport {
    scheme: String,
    public_key: String,
    address: String,
}

fn decode_with<T: BcsDecode>(b64: &str, config: CodecConfig, what: &str) -> Result<T> {
    let bytes = base64_decode(b64, what)?;
    let mut de = Deserializer::with_config(&bytes, config);
    let value = T::decode(&mut de).with_context(|| format!("failed to decode {}", what))?;
    de.finish()
        .with_context(|| format!("failed to decode {}", what))?;
    Ok(value)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn decode(kind: DecodeAs, data: &str, config: CodecConfig) -> Result<()> {
    match kind {
        DecodeAs::Signed => {
            print_json(&decode_with::<SenderSignedData>(data, config, "signed transaction")?)
        }
        DecodeAs::TxData => {
            print_json(&decode_with::<TransactionData>(data, config, "transaction data")?)
        }
        DecodeAs::IntentMessage => {
            print_json(&decode_with::<IntentMessage>(data, config, "intent message")?)
        }
        DecodeAs::Kind => {
            print_json(&decode_with::<TransactionKind>(data, config, "transaction kind")?)
        }
    }
}

fn verify(data: &str, config: CodecConfig, json: bool) -> Result<()> {
    let signed: SenderSignedData = decode_with(data, config, "signed transaction")?;
    let valid = signed.verify().context("signature verification failed")?;
    let report = VerifyReport {
        digest: signed.digest().base64(),
        sender: signed.sender().to_string(),
        scheme: signed.tx_signature.scheme().to_string(),
        valid,
    };

    if json {
        print_json(&report)?;
    } else {
        println!("digest: {}", report.digest);
        println!("sender: {}", report.sender);
        println!("scheme: {}", report.scheme);
        println!("valid:  {}", report.valid);
    }

    if !valid {
        bail!("signature does not verify");
    }
    Ok(())
}

fn key_report(public_key: &PublicKey) -> KeyReport {
    KeyReport {
        scheme: public_key.scheme().to_string(),
        public_key: public_key.base64(),
        address: public_key.to_sui_address().to_string(),
    }
}

fn main() -> Result<()> {
    let Cli { command, json } = Cli::parse();
    let config = CodecConfig::from_env();

    match command {
        Commands::Decode { kind, data } => decode(kind, &data, config),
        Commands::Verify { data } => verify(&data, config, json),
        Commands::Address { public_key } => {
            let public_key = PublicKey::from_base64(&public_key).context("invalid public key")?;
            if json {
                print_json(&key_report(&public_key))
            } else {
                println!("{}", public_key.to_sui_address());
                Ok(())
            }
        }
        Commands::KeypairInfo { keypair } => {
            let keypair = SuiKeyPair::from_base64(&keypair).context("invalid keypair")?;
            let report = key_report(&keypair.public_key());
            if json {
                print_json(&report)
            } else {
                println!("scheme:     {}", report.scheme);
                println!("public key: {}", report.public_key);
                println!("address:    {}", report.address);
                Ok(())
            }
        }
    }
}
