use clap::Parser;
use ordfloat::{decode_float, FloatKey};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Show order-preserving float encodings.
///
/// With no arguments, prints a demonstration table.
#[derive(Parser, Debug)]
#[command(name = "ordfloat", version, about)]
struct Args {
    /// Float literals to encode (e.g. 1.5, -2e10, inf, NaN)
    #[arg(allow_hyphen_values = true)]
    values: Vec<String>,

    /// Hex encodings to decode (e.g. 250200)
    #[arg(long = "hex", value_name = "HEX")]
    hex: Vec<String>,
}

fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_hex(text: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return None;
    }
    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).ok()?;
            u8::from_str_radix(pair, 16).ok()
        })
        .collect()
}

fn show(label: &str, key: &FloatKey) {
    let roundtrip = match decode_float(key.as_bytes()) {
        Ok((_, value)) => format!("✓ {value}"),
        Err(e) => format!("✗ {e}"),
    };
    println!(
        "  {label:>24} -> {:<40} ({} bytes) {roundtrip}",
        format_hex(key.as_bytes()),
        key.as_bytes().len()
    );
}

fn demo() {
    println!("=== Order-Preserving Float Encoding Demo ===\n");

    let values = [
        f64::NAN,
        f64::NEG_INFINITY,
        -f64::MAX,
        -1e308,
        -10000.0,
        -100.0,
        -1.0,
        -0.00123,
        -f64::from_bits(1),
        0.0,
        f64::from_bits(1),
        0.00123,
        0.123,
        1.0,
        12.345,
        100.0,
        9999.000099,
        1e308,
        f64::MAX,
        f64::INFINITY,
    ];

    let keys: Vec<FloatKey> = values.iter().map(|&v| FloatKey::from(v)).collect();

    println!("Values in ascending order and their encodings:");
    for (value, key) in values.iter().zip(&keys) {
        show(&format!("{value:e}"), key);
    }

    println!("\nVerifying lexicographic order matches numerical order:");
    for pair in values.iter().zip(&keys).collect::<Vec<_>>().windows(2) {
        let ((v1, k1), (v2, k2)) = (pair[0], pair[1]);
        if k1.as_bytes() < k2.as_bytes() {
            println!("  ✓ {v1:e} < {v2:e}");
        } else {
            println!("  ✗ {v1:e} >= {v2:e} (order NOT preserved!)");
        }
    }

    println!("\n=== Signed Zero ===\n");
    show("+0.0", &FloatKey::from(0.0));
    show("-0.0", &FloatKey::from(-0.0));

    println!("\n=== Demo Complete ===");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    if args.values.is_empty() && args.hex.is_empty() {
        demo();
        return;
    }

    for text in &args.values {
        match text.parse::<FloatKey>() {
            Ok(key) => show(text, &key),
            Err(e) => warn!(input = %text, error = %e, "not a float literal"),
        }
    }

    for text in &args.hex {
        let Some(bytes) = parse_hex(text) else {
            warn!(input = %text, "not a hex string");
            continue;
        };
        match decode_float(&bytes) {
            Ok((rest, value)) => {
                println!("  {:>24} -> {value}", format_hex(&bytes));
                if !rest.is_empty() {
                    println!("  {:>24}    trailing: {}", "", format_hex(rest));
                }
            }
            Err(e) => warn!(input = %text, error = %e, "cannot decode"),
        }
    }
}
