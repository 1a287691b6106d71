//! # Observability & Tracing
//!
//! Structured logging for the order desk.
//!
//! The [`setup_tracing`] function installs a compact `tracing-subscriber` formatter
//! filtered by `RUST_LOG`. Logs go to **stderr** so they never interleave with the
//! prompts and receipts on stdout; with `RUST_LOG` unset nothing is logged.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Saved/cancelled orders and session start/end
//! RUST_LOG=info cargo run 2>desk.log
//!
//! # Every state transition and rejected input
//! RUST_LOG=debug cargo run 2>desk.log
//!
//! # Raw input lines as well
//! RUST_LOG=trace cargo run 2>desk.log
//! ```
//!
//! ## What Gets Traced
//!
//! - **Session**: start, end and the number of saved orders
//! - **Orders**: each builder state transition inside an `order{seq=N}` span,
//!   the assembled order, and whether it was saved or cancelled
//! - **Input**: rejected lines and control keywords
//!
//! With `RUST_LOG=debug` a typical order looks like:
//!
//! ```text
//! INFO Session started shop=Onehunga Pizzas
//! DEBUG order: Order state seq=1 from=Mode to=Name
//! DEBUG order: Rejected input seq=1 prompt="Enter customer name:" input=r2d2
//! DEBUG order: Order state seq=1 from=Name to=PizzaCount
//! DEBUG order: Pizza selected seq=1 item=Hawaiian chosen=1 count=2
//! INFO order: Order assembled seq=1 customer="alice" mode="Pickup" pizzas=2 total=17.00
//! INFO Order saved order_id=order_1 total=17.00 size=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
