use std::process;

use env_logger::Env;
use radar::{configuration::get_configuration, services::ExtractionReport, startup};
use url::Url;
use uuid::Uuid;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let raw_url = match args.next() {
        Some(url) => url,
        None => {
            println!("Usage: radar <URL> [SESSION_ID]");
            println!("Example: radar https://example.com");
            process::exit(1);
        }
    };

    let target = match Url::parse(&raw_url) {
        Ok(url) => url,
        Err(_) => {
            log::error!("Invalid URL provided: {}", raw_url);
            process::exit(1);
        }
    };

    let session_label = args
        .next()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let settings = match get_configuration() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to read configuration: {}", e);
            process::exit(1);
        }
    };

    match startup::run(target, session_label, settings).await {
        Ok(report) => print_report(&report),
        Err(e) => {
            log::error!("Failed to complete extraction: {:#}", e);
            process::exit(1);
        }
    }
}

fn print_report(report: &ExtractionReport) {
    println!("Extraction results");
    println!("==================");
    println!();

    if report.partners.is_empty() {
        println!("Partners: none found");
    } else {
        println!("Partners found: {}", report.partners.len());
        for (index, partner) in report.partners.iter().enumerate() {
            println!("{}. {}", index + 1, partner);
        }
    }

    println!();

    if report.investors.is_empty() {
        println!("Investors: none found");
    } else {
        println!("Investors found: {}", report.investors.len());
        for (index, investor) in report.investors.iter().enumerate() {
            println!("{}. {}", index + 1, investor);
        }
    }

    if !report.all_names.is_empty() {
        println!();
        println!("All unique organizations: {}", report.all_names.len());
        for (index, name) in report.all_names.iter().enumerate() {
            println!("{}. {}", index + 1, name);
        }
    }
}
