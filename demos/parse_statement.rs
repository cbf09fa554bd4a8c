use bank_sms_rs::ParserBuilder;
use std::env;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "Dear Customer your Account has been credited with ETB 1,000.00 from Jane Doe, Ref No ABC123. Your Current Balance is ETB 5,000.00

Dear Customer your Account has been debited with ETB 40.00 on 02/02/2024.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=bank_sms_rs=debug shows skipped messages
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let builder = if args.len() > 1 {
        let content = std::fs::read_to_string(&args[1])?;
        ParserBuilder::new().content(&content).filename(&args[1])
    } else {
        println!("No file given, parsing the built-in sample\n");
        ParserBuilder::new().content(SAMPLE)
    };

    let transactions = builder.parse()?;

    println!("Found {} transactions\n", transactions.len());

    for (i, tx) in transactions.iter().take(10).enumerate() {
        println!("Transaction {}:", i + 1);
        println!("  Date: {} {}", tx.transaction_date, tx.transaction_time);
        println!("  Amount: {}", tx.amount);
        println!("  Type: {}", tx.transaction_type);
        println!("  Description: {}", tx.description);
        if let Some(balance) = tx.balance {
            println!("  Balance: {}", balance);
        }
        if let Some(ref_no) = &tx.ref_no {
            println!("  Ref: {}", ref_no);
        }
        println!();
    }

    if transactions.len() > 10 {
        println!("... and {} more transactions", transactions.len() - 10);
    }

    Ok(())
}
