use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use iris::{ApprovePayoutRequest, CreatePayoutRequest, IrisGateway, PayoutInstruction};

use crate::sub_commands::print_json;

#[derive(Args)]
pub struct CreatePayoutSubCommand {
    /// JSON file holding a full payout request (`{"payouts": [...]}`)
    #[arg(long, conflicts_with_all = ["beneficiary_name", "beneficiary_account", "beneficiary_bank", "beneficiary_email", "amount", "notes"])]
    file: Option<PathBuf>,
    /// Account holder name
    #[arg(long)]
    beneficiary_name: Option<String>,
    /// Account number
    #[arg(long)]
    beneficiary_account: Option<String>,
    /// Bank code
    #[arg(long)]
    beneficiary_bank: Option<String>,
    /// Notification email
    #[arg(long)]
    beneficiary_email: Option<String>,
    /// Amount, e.g. 100000.00
    #[arg(long)]
    amount: Option<String>,
    /// Transfer notes
    #[arg(long)]
    notes: Option<String>,
}

impl CreatePayoutSubCommand {
    fn request(&self) -> Result<CreatePayoutRequest> {
        if let Some(file) = &self.file {
            let contents = fs::read_to_string(file)?;
            return Ok(serde_json::from_str(&contents)?);
        }

        match (
            &self.beneficiary_name,
            &self.beneficiary_account,
            &self.beneficiary_bank,
            &self.amount,
            &self.notes,
        ) {
            (Some(name), Some(account), Some(bank), Some(amount), Some(notes)) => {
                Ok(CreatePayoutRequest {
                    payouts: vec![PayoutInstruction {
                        beneficiary_name: name.clone(),
                        beneficiary_account: account.clone(),
                        beneficiary_bank: bank.clone(),
                        beneficiary_email: self.beneficiary_email.clone(),
                        amount: amount.clone(),
                        notes: notes.clone(),
                    }],
                })
            }
            _ => bail!(
                "Either --file or all of --beneficiary-name, --beneficiary-account, \
                 --beneficiary-bank, --amount and --notes are required"
            ),
        }
    }
}

#[derive(Args)]
pub struct ApprovePayoutSubCommand {
    /// Reference number of a payout to approve, repeatable
    #[arg(long = "reference-no", required = true)]
    reference_nos: Vec<String>,
    /// Approver one time password
    #[arg(long)]
    otp: Option<String>,
}

#[derive(Subcommand)]
pub enum PayoutsSubCommand {
    /// Create one or more payouts
    Create(CreatePayoutSubCommand),
    /// Approve payouts
    Approve(ApprovePayoutSubCommand),
}

pub async fn payouts(gateway: &IrisGateway, sub_command_args: &PayoutsSubCommand) -> Result<()> {
    match sub_command_args {
        PayoutsSubCommand::Create(args) => {
            let response = gateway.create_payouts(&args.request()?).await?;
            print_json(&response)
        }
        PayoutsSubCommand::Approve(args) => {
            let response = gateway
                .approve_payouts(&ApprovePayoutRequest {
                    reference_nos: args.reference_nos.clone(),
                    otp: args.otp.clone(),
                })
                .await?;
            print_json(&response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_args() -> CreatePayoutSubCommand {
        CreatePayoutSubCommand {
            file: None,
            beneficiary_name: Some("John Doe".to_string()),
            beneficiary_account: Some("1172993826".to_string()),
            beneficiary_bank: Some("bca".to_string()),
            beneficiary_email: None,
            amount: Some("100000.00".to_string()),
            notes: Some("Refund".to_string()),
        }
    }

    #[test]
    fn test_request_from_flags() {
        let request = create_args().request().expect("Request should build");

        assert_eq!(request.payouts.len(), 1);
        assert_eq!(request.payouts[0].beneficiary_bank, "bca");
        assert!(request.payouts[0].beneficiary_email.is_none());
    }

    #[test]
    fn test_request_missing_flags() {
        let args = CreatePayoutSubCommand {
            amount: None,
            ..create_args()
        };

        assert!(args.request().is_err());
    }

    #[test]
    fn test_request_from_file() {
        let path = std::env::temp_dir().join(format!("iris-cli-payouts-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"payouts":[
                {"beneficiary_name":"A","beneficiary_account":"1","beneficiary_bank":"bca","amount":"1.00","notes":"x"},
                {"beneficiary_name":"B","beneficiary_account":"2","beneficiary_bank":"bni","amount":"2.00","notes":"y"}
            ]}"#,
        )
        .expect("Temp file should be writable");

        let args = CreatePayoutSubCommand {
            file: Some(path.clone()),
            beneficiary_name: None,
            beneficiary_account: None,
            beneficiary_bank: None,
            beneficiary_email: None,
            amount: None,
            notes: None,
        };
        let request = args.request();
        let _ = fs::remove_file(&path);

        let request = request.expect("Request should load");
        assert_eq!(request.payouts.len(), 2);
        assert_eq!(request.payouts[1].beneficiary_bank, "bni");
    }
}
