use anyhow::{Context, Result};
use clap::Parser;
use fraction32::Fraction;

#[derive(Parser, Debug)]
#[command(name = "fraction32")]
#[command(about = "Walk two fractions through every arithmetic operation")]
#[command(version)]
struct Cli {
    /// Left operand, e.g. `1/2`
    #[arg(default_value = "1/2", allow_hyphen_values = true)]
    left: Fraction,
    /// Right operand, e.g. `3/4`
    #[arg(default_value = "3/4", allow_hyphen_values = true)]
    right: Fraction,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init().map_err(anyhow::Error::msg)?;

    let Cli { left: mut f1, right: f2 } = Cli::parse();
    println!("f1: {f1}, f2: {f2}");

    let f3 = f1 + f2;
    println!("f1 + f2: {f3}");

    f1 += f2;
    println!("f1 += f2: {f1}");

    f1 -= f2;
    println!("f1 -= f2: {f1}");

    f1 *= f2;
    println!("f1 *= f2: {f1}");

    f1.div_in_place(f2).with_context(|| format!("f1 /= f2 with f2 = {f2}"))?;
    println!("f1 /= f2: {f1}");

    println!("f1 as double: {}", f1.to_f64());
    Ok(())
}
