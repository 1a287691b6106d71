//! # Order Collector
//!
//! > **A console order desk for a small pizza shop.**
//!
//! An operator takes phone orders by answering a fixed sequence of prompts.
//! Each answer is validated as it is typed, the order total is computed from a
//! fixed menu, and a fixed-width receipt is printed. Completed orders are kept
//! in memory for the rest of the session and can be listed at any time between
//! orders.
//!
//! ## 🏗️ Design
//!
//! ### Explicit control flow
//! Every prompt can be abandoned: `cancel`/`cc` drops the order in progress and
//! `quit`/`qq` ends the program. Prompts return a [`Flow`](prompt::Flow)
//! (`Continue(value) | Cancelled | Quit`) so that abandoning is a value the
//! caller must handle, not a magic string.
//!
//! ### Recoverable by default
//! Malformed input is never an error. The prompt prints a message and asks
//! again, as many times as needed. Only console I/O failures and a broken
//! embedded menu surface as errors ([`AppError`](error::AppError)).
//!
//! ### Immutable shop
//! The menu, order limit and delivery charge are loaded once from an embedded
//! TOML document and never change. The menu is sorted by `(price, name)` at
//! load time, and prices are exact cents ([`Money`](model::Money)).
//!
//! ### Observability
//! We use `tracing` with structured fields; logs go to stderr so they stay out
//! of the prompt stream. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`config`]: loads and validates the embedded shop document into a [`Shop`](model::Shop)
//! - [`model`]: money, menu, orders and the session order log
//! - [`prompt`]: the input validator, [`Prompter`](prompt::Prompter), generic over `BufRead`/`Write`
//! - [`order_builder`]: the per-order state machine
//! - [`receipt`]: pure fixed-width rendering of orders
//! - [`lifecycle`]: the session loop and tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Take orders
//! cargo run
//!
//! # With logs
//! RUST_LOG=info cargo run 2>desk.log
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_builder;
pub mod prompt;
pub mod receipt;
