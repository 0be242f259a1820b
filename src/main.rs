mod types;
mod util;
mod impls;
mod defines;
mod errors;
mod validator;
mod client;
mod orders;
mod presenter;
mod logging;

use clap::Parser;
use log::{error, info};

use types::*;
use client::{FuturesApi, FuturesClient};
use errors::ClientError;
use orders::place_order;
use presenter::{print_order_response, print_order_summary};
use validator::validate_order_params;

fn main() {
    if let Err(e) = logging::setup_logging() {
        eprintln!("[WARN] Logging disabled: {}", e);
    }

    // parse arguments via clap
    let cmd_args = CommandlineArgs::parse();

    let status = run(&cmd_args, FuturesClient::from_env);
    std::process::exit(status.code());
}

/// Validate, summarize, build the client, submit, then report.
/// Each failing stage ends the run with its own status code.
fn run<C, F>(args: &CommandlineArgs, make_client: F) -> StatusCode
where
    C: FuturesApi,
    F: FnOnce() -> Result<C, ClientError>,
{
    let params = match validate_order_params(
        &args.symbol,
        &args.side,
        &args.order_type,
        args.quantity,
        args.price,
    ) {
        Ok(params) => params,
        Err(e) => {
            error!("Validation error: {}", e);
            eprintln!("\n[ERROR] {}\n", e);
            return StatusCode::ValidationFailure;
        }
    };

    print_order_summary(&params);

    let client = match make_client() {
        Ok(client) => client,
        Err(e) => {
            error!("Client error: {}", e);
            eprintln!("\n[ERROR] Configuration error: {}\n", e);
            return StatusCode::ClientFailure;
        }
    };

    let response = match place_order(&client, &params) {
        Ok(response) => response,
        Err(e) => {
            error!("Order failed: {}", e);
            eprintln!("\n[ERROR] Order failed: {}\n", e);
            return StatusCode::OrderFailure;
        }
    };

    print_order_response(&response);
    println!("[SUCCESS] Order placed. Order ID: {}\n", response.display("orderId"));
    info!(
        "Session complete. orderId={} status={}",
        response.display("orderId"),
        response.display("status")
    );
    StatusCode::Success
}
