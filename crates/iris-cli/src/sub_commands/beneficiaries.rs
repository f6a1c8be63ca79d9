use anyhow::Result;
use clap::{Args, Subcommand};
use iris::{Beneficiary, IrisGateway};

use crate::sub_commands::print_json;

#[derive(Args)]
pub struct BeneficiaryArgs {
    /// Account holder name
    #[arg(long)]
    name: String,
    /// Account number
    #[arg(long)]
    account: String,
    /// Bank code, see `iris-cli banks`
    #[arg(long)]
    bank: String,
    /// Unique alias of the beneficiary
    #[arg(long)]
    alias_name: String,
    /// Notification email
    #[arg(long)]
    email: String,
}

impl From<&BeneficiaryArgs> for Beneficiary {
    fn from(args: &BeneficiaryArgs) -> Self {
        Self {
            name: args.name.clone(),
            account: args.account.clone(),
            bank: args.bank.clone(),
            alias_name: args.alias_name.clone(),
            email: args.email.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum BeneficiariesSubCommand {
    /// List registered beneficiaries
    List,
    /// Register a beneficiary
    Create(BeneficiaryArgs),
    /// Update a beneficiary
    Update {
        /// Current alias of the beneficiary
        alias: String,
        #[command(flatten)]
        beneficiary: BeneficiaryArgs,
    },
}

pub async fn beneficiaries(
    gateway: &IrisGateway,
    sub_command_args: &BeneficiariesSubCommand,
) -> Result<()> {
    match sub_command_args {
        BeneficiariesSubCommand::List => {
            let beneficiaries = gateway.get_list_beneficiaries().await?;
            print_json(&beneficiaries)
        }
        BeneficiariesSubCommand::Create(args) => {
            let beneficiary = Beneficiary::from(args);
            gateway.create_beneficiaries(&beneficiary).await?;
            println!("Beneficiary {} created", beneficiary.alias_name);
            Ok(())
        }
        BeneficiariesSubCommand::Update { alias, beneficiary } => {
            gateway
                .update_beneficiaries(alias, &Beneficiary::from(beneficiary))
                .await?;
            println!("Beneficiary {} updated", alias);
            Ok(())
        }
    }
}
