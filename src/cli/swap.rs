use super::ui;
use crate::core::Snapshot;
use anyhow::{Result, anyhow, bail};

/// `1 FROM = x.xxxxxx TO`, followed by the source price when known.
pub fn format_exchange_rate(from: &str, to: &str, rate: f64, from_price: Option<f64>) -> String {
    let rate_text = format!("1 {from} = {rate:.6} {to}");
    match from_price {
        Some(price) => format!("{} ({})", rate_text, ui::format_price(Some(price))),
        None => rate_text,
    }
}

fn ensure_supported(snapshot: &Snapshot, symbol: &str) -> Result<()> {
    if !snapshot.is_token_supported(symbol) {
        bail!("Unsupported token: {}", symbol);
    }
    Ok(())
}

pub fn quote_rate(snapshot: &Snapshot, from: &str, to: &str) -> Result<String> {
    ensure_supported(snapshot, from)?;
    ensure_supported(snapshot, to)?;
    if from == to {
        bail!("Cannot swap {} for itself", from);
    }

    let rate = snapshot
        .exchange_rate(from, to)
        .ok_or_else(|| anyhow!("No usable price to quote {} -> {}", from, to))?;
    Ok(format_exchange_rate(from, to, rate, snapshot.token_price(from)))
}

pub fn quote_value(snapshot: &Snapshot, symbol: &str, amount: &str) -> Result<String> {
    ensure_supported(snapshot, symbol)?;
    let value = snapshot
        .usd_value(symbol, amount)
        .ok_or_else(|| anyhow!("Cannot value '{}' {}", amount, symbol))?;
    Ok(format!(
        "{} {} = {}",
        amount.trim(),
        symbol,
        ui::format_usd_value(value)
    ))
}

pub fn run_rate(snapshot: &Snapshot, from: &str, to: &str) -> Result<()> {
    let quote = quote_rate(snapshot, from, to)?;
    println!("{}", ui::style_text(&quote, ui::StyleType::Value));
    Ok(())
}

pub fn run_value(snapshot: &Snapshot, symbol: &str, amount: &str) -> Result<()> {
    let quote = quote_value(snapshot, symbol, amount)?;
    println!(
        "{} {}",
        ui::style_text("USD value:", ui::StyleType::Label),
        ui::style_text(&quote, ui::StyleType::Value)
    );
    Ok(())
}
