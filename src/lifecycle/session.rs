use crate::model::{OrderLog, Shop};
use crate::order_builder::OrderBuilder;
use crate::prompt::{Field, Flow, PromptError, Prompter};
use crate::receipt::{format_order_log, format_receipt};
use regex::Regex;
use std::io::{BufRead, Write};
use std::sync::LazyLock;
use tracing::{debug, info, info_span};

static NEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^$|^[yno]").expect("next-action pattern is valid"));

/// What the operator wants after an order is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    NewOrder,
    ListOrders,
    Quit,
}

/// The driving loop of the order desk.
///
/// A `Session` owns the in-memory [`OrderLog`] and repeatedly runs an
/// [`OrderBuilder`] until the operator quits:
/// - completed orders are printed and appended to the log
/// - cancelled orders are reported and dropped
/// - between orders the operator can start another order, list every saved
///   order, or stop
///
/// # Example
///
/// ```rust
/// use order_collector::{config, lifecycle::Session, prompt::Prompter};
/// use std::io::Cursor;
///
/// let shop = config::load_embedded().unwrap();
/// let script = "\nbob\n1\n12\nn\n";
/// let mut prompter = Prompter::new(Cursor::new(script), Vec::new());
///
/// let mut session = Session::new(&shop);
/// session.run(&mut prompter).unwrap();
/// assert_eq!(session.log().len(), 1);
/// ```
pub struct Session<'a> {
    shop: &'a Shop,
    log: OrderLog,
}

impl<'a> Session<'a> {
    pub fn new(shop: &'a Shop) -> Self {
        Self {
            shop,
            log: OrderLog::new(),
        }
    }

    pub fn log(&self) -> &OrderLog {
        &self.log
    }

    /// Runs orders until the operator quits or input ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), PromptError> {
        info!(shop = %self.shop.name, "Session started");
        prompter.say(banner(self.shop))?;

        loop {
            let span = info_span!("order", seq = self.log.len() + 1);
            let outcome = span.in_scope(|| OrderBuilder::new(self.shop).run(prompter))?;

            match outcome {
                Flow::Continue(order) => {
                    prompter.say("\nOrder saved. Order was:")?;
                    prompter.say(format_receipt(&order).trim_end())?;
                    let total = order.total();
                    let order_id = self.log.append(order);
                    info!(%order_id, %total, size = self.log.len(), "Order saved");
                }
                Flow::Cancelled => {
                    prompter.say("\nOrder cancelled.")?;
                    info!(size = self.log.len(), "Order cancelled");
                }
                Flow::Quit => break,
            }

            if self.next_action(prompter)? == NextAction::Quit {
                break;
            }
        }

        info!(orders = self.log.len(), "Session ended");
        Ok(())
    }

    /// Asks what to do next; listing orders asks again afterwards.
    fn next_action<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<NextAction, PromptError> {
        let field = Field::new(
            "Would you like to enter another order or view all previous orders? [Yes]/No/Orders:",
            &NEXT,
            "Only yes/no or \"orders\" responses allowed",
        );
        loop {
            let action = match prompter.ask(&field)? {
                Flow::Continue(input) => parse_next_action(&input),
                // Nothing is in progress here, so cancel just moves on.
                Flow::Cancelled => NextAction::NewOrder,
                Flow::Quit => NextAction::Quit,
            };
            debug!(?action, "Next action");
            match action {
                NextAction::ListOrders => {
                    prompter.say(format_order_log(&self.log).trim_end())?;
                }
                other => return Ok(other),
            }
        }
    }
}

fn parse_next_action(input: &str) -> NextAction {
    if input.starts_with('n') {
        NextAction::Quit
    } else if input.starts_with('o') {
        NextAction::ListOrders
    } else {
        NextAction::NewOrder
    }
}

/// Welcome text shown once per session.
pub fn banner(shop: &Shop) -> String {
    format!(
        "== {} ==\n\
         ==  Order Manager  ==\n\
         Enter 'CC' to cancel order, or 'QQ' to exit program at any time.\n\
         The first letter of a word is usually only required as input.\n\
         A word [enclosed] in brackets is the default option.\n",
        shop.name
    )
}
