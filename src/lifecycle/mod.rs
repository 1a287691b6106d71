//! # Session Lifecycle
//!
//! Runtime wiring for the interactive order desk.
//!
//! - [`Session`] - the driving loop: build an order, report it, log it, ask what next
//! - [`setup_tracing`] - initializes stderr logging controlled by `RUST_LOG`
//!
//! The binary wires these together:
//!
//! ```rust,ignore
//! setup_tracing();
//! let shop = config::load_embedded()?;
//! let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
//! Session::new(&shop).run(&mut prompter)?;
//! ```
//!
//! A session ends on `n` at the "another order?" prompt, on `quit`/`qq` at any
//! prompt, or when stdin closes. All three are a normal exit.

pub mod session;
pub mod tracing;

pub use session::*;
pub use tracing::*;
