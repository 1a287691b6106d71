//! # Order Builder
//!
//! Collects one order from the console as a sequential state machine:
//!
//! ```text
//! Mode ─▶ Name ─┬───────────────────▶ PizzaCount ─▶ PizzaSelections ─▶ CostComputed
//!               └▶ Address ─▶ Phone ─┘   (Delivery only)
//! ```
//!
//! Each transition needs one validated answer. [`OrderBuilder::run`] consumes
//! the builder, so its terminal outcome lives only in the returned [`Flow`]:
//! `Continue(order)` once the cost is computed, `Cancelled` on a cancel
//! keyword (the partial order is dropped with the builder) and `Quit` on a
//! quit keyword.
//!
//! ## Usage
//!
//! ```rust
//! use order_collector::config;
//! use order_collector::order_builder::OrderBuilder;
//! use order_collector::prompt::{Flow, Prompter};
//! use std::io::Cursor;
//!
//! let shop = config::load_embedded().unwrap();
//! // pickup, name, two pizzas, both menu item 4
//! let mut prompter = Prompter::new(Cursor::new("p\nalice\n2\n4\n4\n"), Vec::new());
//!
//! let Flow::Continue(order) = OrderBuilder::new(&shop).run(&mut prompter).unwrap() else {
//!     panic!("order should complete");
//! };
//! assert_eq!(order.lines().len(), 1);
//! assert_eq!(order.total().to_string(), "17.00");
//! ```

pub mod error;

pub use error::*;

use crate::model::{Fulfillment, Order, OrderLines, Shop};
use crate::prompt::{Field, Flow, PromptError, Prompter};
use regex::Regex;
use std::io::{BufRead, Write};
use std::sync::LazyLock;
use tracing::{debug, info};

const NAME_LEN: usize = 48;
const ADDRESS_LEN: usize = 36;
const PHONE_LEN: usize = 11;

static MODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^$|^[pd]").expect("mode pattern is valid"));
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+( [a-z]+)*$").expect("name pattern is valid"));
static ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ -/\w]+$").expect("address pattern is valid"));
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

/// Where the builder is in the order flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Mode,
    Name,
    Address,
    Phone,
    PizzaCount,
    PizzaSelections { count: u32, chosen: u32 },
    CostComputed,
}

enum Step {
    Next(BuildState),
    Finished(Order),
}

// Partial order data; dropped on cancel.
#[derive(Debug, Default)]
struct Draft {
    delivery: bool,
    customer: String,
    address: String,
    phone: String,
    lines: OrderLines,
}

/// Drives one order through the [`BuildState`] machine.
pub struct OrderBuilder<'a> {
    shop: &'a Shop,
    state: BuildState,
    draft: Draft,
}

impl<'a> OrderBuilder<'a> {
    pub fn new(shop: &'a Shop) -> Self {
        Self {
            shop,
            state: BuildState::Mode,
            draft: Draft::default(),
        }
    }

    /// Runs the flow to completion, cancellation or quit.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Flow<Order>, PromptError> {
        loop {
            let step = match self.step(prompter)? {
                Flow::Continue(step) => step,
                Flow::Cancelled => {
                    debug!(from = ?self.state, "Order cancelled");
                    return Ok(Flow::Cancelled);
                }
                Flow::Quit => {
                    debug!(from = ?self.state, "Quit during order");
                    return Ok(Flow::Quit);
                }
            };
            match step {
                Step::Next(next) => {
                    debug!(from = ?self.state, to = ?next, "Order state");
                    self.state = next;
                }
                Step::Finished(order) => {
                    debug!(from = ?self.state, "Order complete");
                    return Ok(Flow::Continue(order));
                }
            }
        }
    }

    fn step<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Flow<Step>, PromptError> {
        let draft = &mut self.draft;
        let flow = match self.state {
            BuildState::Mode => {
                let field = Field::new(
                    "Pickup or delivery? [Pickup]:",
                    &MODE,
                    "Please enter a 'p' (pickup) or a 'd' (delivery)",
                );
                prompter.ask(&field)?.map(|input| {
                    draft.delivery = input.starts_with('d');
                    Step::Next(BuildState::Name)
                })
            }
            BuildState::Name => {
                let field = Field::new(
                    "Enter customer name:",
                    &NAME,
                    "Name must only contain letters",
                );
                let delivery = draft.delivery;
                prompter.ask(&field)?.map(|input| {
                    draft.customer = clip(&input, NAME_LEN);
                    if delivery {
                        Step::Next(BuildState::Address)
                    } else {
                        Step::Next(BuildState::PizzaCount)
                    }
                })
            }
            BuildState::Address => {
                let field = Field::new(
                    "Delivery address:",
                    &ADDRESS,
                    "Address must only contain alphanumeric characters",
                );
                prompter.ask(&field)?.map(|input| {
                    draft.address = clip(&input, ADDRESS_LEN);
                    Step::Next(BuildState::Phone)
                })
            }
            BuildState::Phone => {
                let field = Field::new(
                    "Phone number:",
                    &DIGITS,
                    "Phone number must only contain numbers",
                );
                prompter.ask(&field)?.map(|input| {
                    draft.phone = clip(&input, PHONE_LEN);
                    Step::Next(BuildState::PizzaCount)
                })
            }
            BuildState::PizzaCount => {
                let max = self.shop.max_pizzas;
                let error = format!("Must be a number, {max} or less");
                let field = Field::new("Number of pizzas to order:", &DIGITS, &error);
                let flow = prompter.ask_parsed(&field, |input| parse_count(input, max))?;
                if let Flow::Continue(_) = flow {
                    prompter.say("\nWhat pizzas would you like to order?")?;
                    prompter.say(self.shop.menu.listing())?;
                    prompter.say("\nEnter your selection number for each pizza you want to buy")?;
                }
                flow.map(|count| Step::Next(BuildState::PizzaSelections { count, chosen: 0 }))
            }
            BuildState::PizzaSelections { count, chosen } => {
                let menu = &self.shop.menu;
                let prompt = format!("Pizza #{} of {}:", chosen + 1, count);
                let field = Field::new(
                    &prompt,
                    &DIGITS,
                    "Pizza selection number must correspond to those listed above",
                );
                let flow = prompter.ask_parsed(&field, |input| -> Result<_, OrderError> {
                    // Digits-only input that overflows is out of range anyway.
                    let number = input.parse::<usize>().unwrap_or(usize::MAX);
                    Ok(menu.select(number)?)
                })?;
                flow.map(|item| {
                    draft.lines.add(item);
                    let chosen = chosen + 1;
                    debug!(item = %item.name, chosen, count, "Pizza selected");
                    if chosen == count {
                        Step::Next(BuildState::CostComputed)
                    } else {
                        Step::Next(BuildState::PizzaSelections { count, chosen })
                    }
                })
            }
            BuildState::CostComputed => {
                let draft = std::mem::take(draft);
                let fulfillment = if draft.delivery {
                    Fulfillment::Delivery {
                        address: draft.address,
                        phone: draft.phone,
                    }
                } else {
                    Fulfillment::Pickup
                };
                let order = Order::new(
                    draft.customer,
                    fulfillment,
                    draft.lines,
                    self.shop.delivery_charge,
                );
                info!(
                    customer = order.customer(),
                    mode = order.fulfillment().label(),
                    pizzas = order.lines().pizza_count(),
                    total = %order.total(),
                    "Order assembled"
                );
                Flow::Continue(Step::Finished(order))
            }
        };
        Ok(flow)
    }
}

fn parse_count(input: &str, max: u32) -> Result<u32, OrderError> {
    match input.parse::<u32>() {
        Ok(count) if (1..=max).contains(&count) => Ok(count),
        _ => Err(OrderError::PizzaCount { max }),
    }
}

fn clip(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect::<String>().trim_end().to_string()
}
