//! The form for creating and editing transactions.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    category::Category,
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::core::{Transaction, TransactionBuilder, TransactionType, format_date, parse_date},
};

/// The raw form data submitted when creating or editing a transaction.
///
/// Every field is kept as text so that invalid input can be reported with an
/// alert instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransactionForm {
    /// A short label for the transaction.
    #[serde(default)]
    pub title: String,
    /// The amount in rupees, e.g. "1500" or "12.50".
    #[serde(default)]
    pub amount: String,
    /// One of the category names, e.g. "Food".
    #[serde(default)]
    pub category: String,
    /// "Income" or "Expense".
    #[serde(default)]
    pub type_: String,
    /// The date as YYYY-MM-DD.
    #[serde(default)]
    pub date: String,
}

impl TransactionForm {
    /// Parse and check the form fields.
    ///
    /// # Errors
    /// Returns the first invalid input error found. The title is checked last.
    pub fn validate(&self) -> Result<TransactionBuilder, Error> {
        let amount = parse_amount(&self.amount)?;
        let category: Category = self.category.trim().parse()?;
        let transaction_type: TransactionType = self.type_.trim().parse()?;
        let date = parse_date(&self.date)?;

        let builder = Transaction::build(amount, date, &self.title, category)
            .transaction_type(transaction_type);
        builder.validate()?;

        Ok(builder)
    }
}

fn parse_amount(text: &str) -> Result<f64, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(text.to_owned()))
}

/// The values to pre-fill the transaction form with.
pub struct TransactionFormDefaults<'a> {
    pub title: Option<&'a str>,
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub transaction_type: TransactionType,
    pub date: Date,
}

impl<'a> TransactionFormDefaults<'a> {
    /// Defaults for a new transaction: an expense dated `today`.
    pub fn new_transaction(today: Date) -> Self {
        Self {
            title: None,
            amount: None,
            category: None,
            transaction_type: TransactionType::Expense,
            date: today,
        }
    }

    /// Defaults that show the current values of `transaction`.
    pub fn from_transaction(transaction: &'a Transaction) -> Self {
        Self {
            title: Some(&transaction.title),
            amount: Some(transaction.amount),
            category: Some(transaction.category),
            transaction_type: transaction.transaction_type,
            date: transaction.date,
        }
    }
}

/// The inputs shared by the create and edit forms.
pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    // Display prints the shortest text that parses back to the same value.
    let amount_str = defaults.amount.map(|amount| amount.to_string());

    html! {
        div
        {
            label for="title" class=(FORM_LABEL_STYLE) { "Title" }

            input
                name="title"
                id="title"
                type="text"
                placeholder="Transaction title"
                required
                autofocus
                value=[defaults.title]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount (₹)" }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="any"
                    min="0"
                    placeholder="0.00"
                    required
                    value=[amount_str.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for transaction_type in TransactionType::ALL {
                    @let id = format!("transaction-type-{}", transaction_type.as_str().to_lowercase());

                    div class="flex flex-1 items-center gap-3"
                    {
                        input
                            name="type_"
                            id=(id)
                            type="radio"
                            value=(transaction_type.as_str())
                            checked[transaction_type == defaults.transaction_type]
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (transaction_type) }
                    }
                }
            }
        }

        div
        {
            label for="category" class=(FORM_LABEL_STYLE) { "Category" }

            select name="category" id="category" required class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" disabled selected[defaults.category.is_none()] { "Select category" }

                @for category in Category::ALL {
                    option value=(category.as_str()) selected[defaults.category == Some(category)]
                    {
                        (category)
                    }
                }
            }
        }

        div
        {
            label for="date" class=(FORM_LABEL_STYLE) { "Date" }

            input
                name="date"
                id="date"
                type="date"
                required
                value=(format_date(defaults.date))
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
