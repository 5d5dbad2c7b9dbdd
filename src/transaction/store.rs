//! The in-memory store that owns a session's transactions.

use time::OffsetDateTime;

use crate::Error;

use super::core::{Transaction, TransactionBuilder, TransactionId};

/// Holds the transactions for the current session, most recent first.
///
/// The store is the only owner of the transaction list. Views such as the
/// filtered list or a report are derived from [TransactionStore::transactions]
/// by pure functions and never write back.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    last_issued_id: i128,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from existing transactions, e.g. seed data.
    ///
    /// The order of `transactions` is kept as given.
    ///
    /// # Errors
    /// Returns [Error::DuplicateTransactionId] if two transactions share an ID.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Result<Self, Error> {
        let mut store = Self::new();

        // Insert oldest first so that prepending restores the given order.
        for transaction in transactions.into_iter().rev() {
            store.insert(transaction)?;
        }

        Ok(store)
    }

    /// All transactions, most recent first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no transaction with `id`.
    pub fn get(&self, id: &TransactionId) -> Result<&Transaction, Error> {
        self.transactions
            .iter()
            .find(|transaction| &transaction.id == id)
            .ok_or(Error::NotFound)
    }

    /// Add a new transaction to the front of the list and give it a fresh ID.
    ///
    /// # Errors
    /// Returns an error if `builder` fails validation, in which case the store
    /// is left unchanged.
    pub fn add(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        builder.validate()?;

        let id = self.next_id(current_unix_millis());
        let transaction = builder.finalise(id);
        self.transactions.insert(0, transaction.clone());

        tracing::debug!("added transaction {}", transaction.id);

        Ok(transaction)
    }

    /// Add a transaction that already has an ID to the front of the list.
    ///
    /// # Errors
    /// Returns [Error::DuplicateTransactionId] if the ID is taken, or a
    /// validation error if the amount or title is invalid.
    pub fn insert(&mut self, transaction: Transaction) -> Result<(), Error> {
        if self.contains(&transaction.id) {
            return Err(Error::DuplicateTransactionId(transaction.id));
        }

        TransactionBuilder {
            title: transaction.title.clone(),
            amount: transaction.amount,
            category: transaction.category,
            transaction_type: transaction.transaction_type,
            date: transaction.date,
        }
        .validate()?;

        self.transactions.insert(0, transaction);

        Ok(())
    }

    /// Replace every field of the transaction with `id`, keeping its ID and
    /// its position in the list.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if there is no transaction
    /// with `id`, or a validation error if `builder` is invalid. The store is
    /// unchanged in both cases.
    pub fn update(
        &mut self,
        id: &TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        builder.validate()?;

        let Some(existing) = self
            .transactions
            .iter_mut()
            .find(|transaction| &transaction.id == id)
        else {
            return Err(Error::UpdateMissingTransaction);
        };

        *existing = builder.finalise(id.clone());

        tracing::debug!("updated transaction {id}");

        Ok(existing.clone())
    }

    /// Delete the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if there is no transaction
    /// with `id`, the store is left unchanged.
    pub fn remove(&mut self, id: &TransactionId) -> Result<Transaction, Error> {
        let position = self
            .transactions
            .iter()
            .position(|transaction| &transaction.id == id)
            .ok_or(Error::DeleteMissingTransaction)?;

        tracing::debug!("removed transaction {id}");

        Ok(self.transactions.remove(position))
    }

    fn contains(&self, id: &TransactionId) -> bool {
        self.transactions
            .iter()
            .any(|transaction| &transaction.id == id)
    }

    /// Issue a time based ID that is strictly greater than the last one and
    /// not already used by a seeded transaction.
    fn next_id(&mut self, now_millis: i128) -> TransactionId {
        let mut candidate = now_millis.max(self.last_issued_id + 1);

        while self.contains(&TransactionId::new(candidate.to_string())) {
            candidate += 1;
        }

        self.last_issued_id = candidate;

        TransactionId::new(candidate.to_string())
    }
}

fn current_unix_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}
