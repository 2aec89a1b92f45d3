use std::{
    env,
    error::Error,
    fs,
    io::{self, Read},
};

use serde::Deserialize;
use ticket_service::{
    config::TicketServiceConfig,
    logger::LogCrateSink,
    models::ticket::TicketTypeRequest,
    purchase::ticket_service::TicketService,
    services::blackhole::Blackhole,
};

// {"account_id": 1, "requests": [{"infant": 2, "child": 3, "adult": 2}]}
#[derive(Debug, Deserialize)]
struct PurchaseDocument {
    account_id: serde_json::Value,
    requests: Vec<TicketTypeRequest>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match env::var("TICKET_SERVICE_CONFIG") {
        Ok(path) => TicketServiceConfig::from_file(path)?,
        Err(_) => TicketServiceConfig::default(),
    };

    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let document: PurchaseDocument = serde_json::from_str(&input)?;

    let service = TicketService::new(
        Blackhole::default(),
        Blackhole::default(),
        LogCrateSink::default(),
    )
    .with_config(config);
    let result = service
        .purchase_tickets(&document.account_id, &document.requests)
        .await?;

    log::info!(
        "purchased {} seats for {}",
        result.total_seats,
        result.total_amount
    );
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
