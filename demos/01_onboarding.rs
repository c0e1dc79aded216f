//! # Demo 01: Customer Onboarding
//!
//! The happy path: onboard a customer, open an account for them, list
//! the customer's accounts and adjust the balance with a patch.
//!
//! Run with: `cargo run -p rebank-demos --example 01_onboarding`

use anyhow::Result;
use chrono::NaiveDate;
use rebank_core::{AccountDraft, CustomerDraft};
use rebank_demos::{init_tracing, open_services};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    println!("=== Demo 01: Customer Onboarding ===\n");

    let (customers, accounts) = open_services();

    // Step 1: onboard the customer
    let jane = customers
        .create(CustomerDraft {
            id: None,
            full_name: Some("Jane Milton".to_string()),
            address: Some("12 Acacia Ave".to_string()),
            phone_number: Some("+40 (123) 456-7890".to_string()),
            ssn: Some("123-45-6789".to_string()),
        })
        .await?;
    println!("Onboarded: {jane}");

    // Step 2: open an EUR account
    let account = accounts
        .create(AccountDraft {
            id: None,
            iban: Some("GB82 WEST 1234 5698 7654 32".to_string()),
            currency: Some("EUR".to_string()),
            amount: Some(dec!(400)),
            customer_id: Some(jane.id),
            issued_at: NaiveDate::from_ymd_opt(2022, 5, 7),
        })
        .await?;
    println!("Opened:    {account}");

    // Step 3: list everything she owns
    let owned = accounts.get_for_customer(jane.id).await?;
    println!("\nAccounts for customer {}:", jane.id);
    for account in &owned {
        println!("  - {account}");
    }

    // Step 4: top up the balance with a partial update
    let patched = accounts
        .patch(AccountDraft {
            id: Some(account.id),
            amount: Some(dec!(750.50)),
            ..Default::default()
        })
        .await?;
    println!("\nAfter patch: {patched}");

    Ok(())
}
