use anyhow::Result;
use iris::IrisGateway;

use crate::sub_commands::print_json;

pub async fn banks(gateway: &IrisGateway) -> Result<()> {
    let banks = gateway.get_list_beneficiary_bank().await?;

    print_json(&banks.beneficiary_banks)
}
