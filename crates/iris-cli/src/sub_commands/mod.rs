use anyhow::Result;
use serde::Serialize;

pub mod banks;
pub mod beneficiaries;
pub mod payouts;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
