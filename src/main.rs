use cinema_tickets::application::ticket_service::TicketService;
use cinema_tickets::domain::ports::{PaymentGatewayBox, SeatReservationBox};
use cinema_tickets::domain::ticket::AccountId;
use cinema_tickets::infrastructure::in_memory::{InMemoryPaymentGateway, InMemorySeatReservation};
use cinema_tickets::interfaces::csv::request_reader::RequestReader;
use cinema_tickets::interfaces::receipt_writer::{ReceiptFormat, ReceiptWriter};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file of ticket requests (`category, count` rows)
    input: PathBuf,

    /// Account purchasing the tickets
    #[arg(long, allow_negative_numbers = true)]
    account_id: Option<i64>,

    /// Receipt format written to stdout
    #[arg(long, value_enum, default_value_t = ReceiptFormat::Csv)]
    format: ReceiptFormat,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let payment_gateway: PaymentGatewayBox = Box::new(InMemoryPaymentGateway::new());
    let seat_reservation: SeatReservationBox = Box::new(InMemorySeatReservation::new());
    let service = TicketService::new(payment_gateway, seat_reservation);

    // A purchase is all-or-nothing, so any unreadable row aborts it.
    let file = File::open(&cli.input).into_diagnostic()?;
    let requests = RequestReader::new(file).read_all().into_diagnostic()?;

    let outcome = service
        .purchase_tickets(cli.account_id, &requests)
        .into_diagnostic()?;
    let account = AccountId::try_from(cli.account_id).into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock(), cli.format);
    writer.write_receipt(account, &outcome).into_diagnostic()?;

    Ok(())
}
