use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use fractic_server_error::ServerError;
use log::trace;

use crate::{
    domain::{logic::hint_enricher::HintEnricher, repositories::hint_repository::HintRepository},
    entities::{
        ConversationId, Hint, HistoryCategory, Step, StepRole, TransactionRecord, Tx,
    },
    errors::{MissingField, StepOutOfRange, TransactionIncomplete},
    parsers::{handle_amount, handle_raw, parse_date},
    presentation::template_printer::TemplatePrinter,
};

const LEDGER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Single-posting-pair transaction: amount, source account, target account
/// and description, gathered in that order.
#[derive(Debug, Clone)]
pub struct SimpleTx {
    steps: Vec<Step>,
    data: Vec<Option<String>>,
    date: Option<String>,
    step: usize,
    printer: TemplatePrinter,
}

/// Opens a transaction from the message that started it. A second token in
/// that message (e.g. "/simple 2024-01-31") sets the transaction date.
///
/// `suggested_currency` only shows up in the amount prompt.
pub fn create_simple_tx(
    initiating_text: &str,
    suggested_currency: &str,
) -> Result<SimpleTx, ServerError> {
    SimpleTx::new()
        .add_step(Step::new(
            StepRole::Amount,
            format!(
                "Please enter the amount of money (e.g. '12.34' or '12.34 {}')",
                suggested_currency
            ),
            handle_amount,
        ))
        .add_step(Step::new(
            StepRole::From,
            "Please enter the account the money came from (or select one from the list)",
            handle_raw,
        ))
        .add_step(Step::new(
            StepRole::To,
            "Please enter the account the money went to (or select one from the list)",
            handle_raw,
        ))
        .add_step(Step::new(
            StepRole::Description,
            "Please enter a description (or select one from the list)",
            handle_raw,
        ))
        .set_date_if_provided(initiating_text)
}

impl SimpleTx {
    fn new() -> Self {
        Self {
            steps: Vec::new(),
            data: Vec::new(),
            date: None,
            step: 0,
            printer: TemplatePrinter::default(),
        }
    }

    fn add_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self.data = vec![None; self.steps.len()];
        self
    }

    fn set_date_if_provided(mut self, initiating_text: &str) -> Result<Self, ServerError> {
        if let Some(raw_date) = initiating_text.split(' ').nth(1) {
            self.date = Some(parse_date(raw_date)?);
        }
        Ok(self)
    }

    /// Aligns the amount's decimal point to `dot_indent` instead of the
    /// default column.
    pub fn with_dot_indent(mut self, dot_indent: usize) -> Self {
        self.printer = TemplatePrinter::new(dot_indent);
        self
    }

    /// Date given when the transaction was opened, or the one fixed by the
    /// first render.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Fixes the date to today (in the user's timezone) unless one is set.
    /// Returns whether it did.
    fn set_date_if_empty(&mut self, now: DateTime<Utc>, tz_offset: i32) -> bool {
        if self.date.is_some() {
            return false;
        }
        let local = now + TimeDelta::hours(i64::from(tz_offset));
        self.date = Some(local.format(LEDGER_DATE_FORMAT).to_string());
        true
    }

    fn value(&self, role: StepRole) -> Result<String, ServerError> {
        self.steps
            .iter()
            .zip(&self.data)
            .find(|(step, _)| step.role == role)
            .and_then(|(_, value)| value.clone())
            .ok_or_else(|| MissingField::new(&role.to_string()))
    }

    fn record(&self) -> Result<TransactionRecord, ServerError> {
        Ok(TransactionRecord {
            date: self.date.clone().unwrap_or_default(),
            description: self.value(StepRole::Description)?,
            account_from: self.value(StepRole::From)?,
            account_to: self.value(StepRole::To)?,
            amount: self.value(StepRole::Amount)?,
        })
    }

    pub(crate) fn render_at(
        &mut self,
        now: DateTime<Utc>,
        currency: &str,
        tag: &str,
        tz_offset: i32,
    ) -> Result<String, ServerError> {
        if !self.is_done() {
            return Err(TransactionIncomplete::new(&self.debug()));
        }
        if self.set_date_if_empty(now, tz_offset) {
            trace!("Set fallback date for transaction: {:?}", self.date);
        }
        let record = self.record()?;
        self.printer.print_transaction(&record, currency, tag)
    }
}

impl Tx for SimpleTx {
    fn input(&mut self, raw: &str) -> Result<(), ServerError> {
        let step = self
            .steps
            .get(self.step)
            .ok_or_else(|| StepOutOfRange::new(self.step, self.steps.len()))?;
        let value = step.parse(raw)?;
        self.data[self.step] = Some(value);
        self.step += 1;
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.step >= self.steps.len()
    }

    fn next_hint(&self, hints: &dyn HintRepository, scope: &ConversationId) -> Option<Hint> {
        let Some(step) = self.steps.get(self.step) else {
            trace!(
                "[{}] During extraction of next hint an error occurred: step exceeds max index.",
                scope
            );
            return None;
        };
        Some(HintEnricher::new(hints, scope).enrich(step))
    }

    fn render(&mut self, currency: &str, tag: &str, tz_offset: i32) -> Result<String, ServerError> {
        self.render_at(Utc::now(), currency, tag, tz_offset)
    }

    fn data_keys(&self) -> BTreeMap<HistoryCategory, String> {
        let mut keys: BTreeMap<HistoryCategory, String> = self
            .steps
            .iter()
            .zip(&self.data)
            .filter_map(|(step, value)| Some((step.role.category(), value.clone()?)))
            .collect();
        if let Some(date) = &self.date {
            keys.insert(HistoryCategory::Date, date.clone());
        }
        keys
    }

    fn debug(&self) -> String {
        format!(
            "SimpleTx{{step={}, totalSteps={}, data={:?}}}",
            self.step,
            self.steps.len(),
            self.data
        )
    }
}
