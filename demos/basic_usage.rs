//! Basic logger usage example
//!
//! Demonstrates level filtering, parameters, contexts, errors and handlers.
//!
//! Run with: cargo run --example basic_usage

use logfmt_logger::prelude::*;
use std::io;

fn main() -> Result<()> {
    println!("=== Logfmt Logger - Basic Usage Example ===\n");

    println!("1. Process-wide logger with the default Info threshold:");
    logfmt_logger::debug("cache warmed", []);
    logfmt_logger::info("service started", [with_value("port", 8080)]);
    logfmt_logger::warn("disk almost full", [with_value("free_mb", 512)]);

    println!("\n2. Lowering the threshold:");
    logfmt_logger::set_min_level(Level::Debug);
    logfmt_logger::debug("cache warmed", [with_value("entries", 1024)]);

    println!("\n3. Context shared by several messages:");
    let ctx = LogContext::new()
        .with_value("request_id", "req-42")
        .with_value("user", "jane doe");
    logfmt_logger::info_ctx(&ctx, "request received", [with_value("path", "/orders")]);

    println!("\n4. Errors, codes and status codes:");
    let err = io::Error::new(io::ErrorKind::NotFound, "order 17 not found");
    let message = logfmt_logger::error_ctx_err(
        &ctx,
        err,
        "lookup failed",
        [with_code("ORD-404"), with_status_code(404)],
    );
    println!("   returned message: {}", message);

    println!("\n5. Dedicated logger with a JSON handler on stdout:");
    let logger = Logger::builder()
        .min_level(Level::Info)
        .output(Output::Stderr)
        .handler(JsonHandler::new(io::stdout()))
        .on_handler_error(stderr_diagnostics())
        .build();
    logfmt_logger::warn!(logger, "queue backlog", "depth" => 310, "limit" => 250);

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
