use std::io;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use pwncheck_client::{
    API_KEY_ENV, AccountChecker, BreachRecord, Credential, DEMO_MESSAGE, RangeClient,
};
use rand::thread_rng;

mod report;

use report::{MessageBank, Severity, group_digits, strength_tips};

#[derive(Parser, Debug)]
#[command(name = "pwncheck")]
#[command(about = "Check whether a password or email address has appeared in known data breaches")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Disable the progress spinner
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a password against the breach corpus via a k-anonymity range query
    Password {
        /// Password to check; read from stdin when omitted
        password: Option<String>,
    },

    /// Look up the breaches an email address appeared in
    Email {
        /// Address to look up
        address: String,

        /// HIBP API key; falls back to HIBP_API_KEY. Demo mode when unset.
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("{0}")]
    Check(#[from] pwncheck_client::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    match args.command {
        Command::Password { password } => {
            let secret = match password {
                Some(password) => password,
                None => read_stdin_line()?,
            };

            let spinner = spinner(args.no_progress);
            let result = RangeClient::new().occurrences(&secret).await;
            if let Some(bar) = spinner {
                bar.finish_and_clear();
            }

            report_password(&secret, result?);
        }
        Command::Email { address, api_key } => {
            let raw_key = api_key.or_else(|| std::env::var(API_KEY_ENV).ok());
            let checker = AccountChecker::from_credential(Credential::resolve(raw_key.as_deref()));

            let spinner = spinner(args.no_progress);
            let result = checker.breaches_for(&address).await;
            if let Some(bar) = spinner {
                bar.finish_and_clear();
            }

            report_email(&address, &result?, checker.is_demo());
        }
    }

    Ok(())
}

fn read_stdin_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn spinner(disabled: bool) -> Option<ProgressBar> {
    if disabled {
        return None;
    }
    let bar = ProgressBar::new_spinner();
    bar.set_message("Checking...");
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}

fn report_password(secret: &str, count: u64) {
    let bank = MessageBank::load();
    let mut rng = thread_rng();

    if count == 0 {
        println!("Password not found in any known data breach.");
        println!("{}", bank.safe(&mut rng));
        println!();
        println!("Keep it that way:");
        println!("  - don't share it with anyone");
        println!("  - use it only on trusted sites");
        println!("  - consider using a password manager");
        println!("  - enable two-factor authentication when available");
    } else {
        let severity = Severity::of_count(count);
        let times = if count == 1 { "time" } else { "times" };
        println!(
            "Password compromised: seen {} {times} in data breaches.",
            group_digits(count)
        );
        println!("Severity: {severity}");
        println!("{}", bank.compromised(severity, &mut rng));
        println!();
        println!("Change it immediately:");
        println!("  - create a new, unique password");
        println!("  - use a password manager");
        println!("  - enable two-factor authentication");
        println!("  - never reuse this password anywhere");
    }

    let tips = strength_tips(secret);
    if !tips.is_empty() {
        println!();
        println!("Password strength tips:");
        for tip in tips {
            println!("  - {tip}");
        }
    }
}

fn report_email(address: &str, breaches: &[BreachRecord], demo: bool) {
    if demo {
        println!("{DEMO_MESSAGE}");
        println!();
    }

    if breaches.is_empty() {
        println!("No known breaches for {address}.");
        return;
    }

    let plural = if breaches.len() == 1 { "breach" } else { "breaches" };
    println!("{address} appeared in {} {plural}:", breaches.len());

    for breach in breaches {
        let title = if breach.title.is_empty() { &breach.name } else { &breach.title };
        let date = breach
            .breach_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unknown date".to_string());
        println!("  - {title} ({}, {date})", breach.domain);
        if !breach.data_classes.is_empty() {
            println!("    compromised: {}", breach.data_classes.join(", "));
        }
    }
}
