//! # Demo 02: Consistency Rules
//!
//! The unhappy paths: collected validation findings, the owner-existence
//! check on account creation, and the referential-integrity guard on
//! customer deletion.
//!
//! Run with: `cargo run -p rebank-demos --example 02_consistency`

use anyhow::Result;
use chrono::NaiveDate;
use rebank_business::ServiceError;
use rebank_core::{AccountDraft, CustomerDraft};
use rebank_demos::{init_tracing, open_services};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    println!("=== Demo 02: Consistency Rules ===\n");

    let (customers, accounts) = open_services();

    // A submission with three independent problems reports all of them
    let bad = AccountDraft {
        id: None,
        iban: Some("WHAAT".to_string()),
        currency: Some("DDD".to_string()),
        amount: Some(dec!(-5)),
        customer_id: Some(1),
        issued_at: NaiveDate::from_ymd_opt(2022, 5, 7),
    };
    match accounts.create(bad).await {
        Err(ServiceError::Validation(report)) => {
            println!("Rejected submission, {} findings:", report.len());
            for message in report.sorted_messages() {
                println!("  - {message}");
            }
        }
        other => println!("unexpected: {other:?}"),
    }

    // An account cannot be opened for a customer that does not exist
    let orphan = AccountDraft {
        id: None,
        iban: Some("GB82WEST12345698765432".to_string()),
        currency: Some("EUR".to_string()),
        amount: Some(dec!(100)),
        customer_id: Some(999),
        issued_at: NaiveDate::from_ymd_opt(2022, 5, 7),
    };
    if let Err(err) = accounts.create(orphan).await {
        println!("\nOrphan account rejected: {err}");
    }

    // A customer with accounts cannot be deleted
    let jane = customers
        .create(CustomerDraft {
            id: None,
            full_name: Some("Jane Milton".to_string()),
            address: Some("12 Acacia Ave".to_string()),
            phone_number: Some("123-456-7890".to_string()),
            ssn: Some("123-45-6789".to_string()),
        })
        .await?;
    let account = accounts
        .create(AccountDraft {
            id: None,
            iban: Some("GB82WEST12345698765432".to_string()),
            currency: Some("EUR".to_string()),
            amount: Some(dec!(400)),
            customer_id: Some(jane.id),
            issued_at: NaiveDate::from_ymd_opt(2022, 5, 7),
        })
        .await?;

    if let Err(err) = customers.delete_by_id(jane.id).await {
        println!("\nDelete blocked: {err}");
    }

    // Deleting the account first unblocks the customer
    let removed = accounts.delete_by_id(account.id).await?;
    println!("Removed {removed} account(s)");
    let gone = customers.delete_by_id(jane.id).await?;
    println!("Deleted {gone}");

    Ok(())
}
