/*!
 * Transaction helper
 *
 * Runs a closure inside a database transaction: commit on `Ok`, rollback on `Err`.
 */

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionError, TransactionTrait};
use std::fmt::{Debug, Display};
use std::future::Future;
use std::pin::Pin;

/// Type alias for boxed future used in transactions
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Execute a function within a database transaction.
///
/// The closure's own error type is returned unchanged, so a `NotFound` or `Conflict`
/// raised inside the transaction reaches the caller as-is.
///
/// ```rust,ignore
/// let product = with_transaction(&db, |txn| {
///     Box::pin(async move {
///         let product = product.insert(txn).await?;
///         stock.insert(txn).await?;
///         Ok(product)
///     })
/// })
/// .await?;
/// ```
pub async fn with_transaction<F, T, E>(db: &DatabaseConnection, f: F) -> Result<T, E>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> BoxFuture<'a, Result<T, E>> + Send,
    T: Send,
    E: From<DbErr> + Display + Debug + Send,
{
    db.transaction(f).await.map_err(|e| match e {
        TransactionError::Connection(db_err) => E::from(db_err),
        TransactionError::Transaction(err) => err,
    })
}
