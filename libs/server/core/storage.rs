use native_db::{
    transaction::{self},
    Builder, Database, Models, ToInput,
};
use once_cell::sync::Lazy;
use std::{path::Path, sync::Arc};

use crate::entities::activity::Activity;

static MODELS: Lazy<Models> = Lazy::new(|| {
    let mut models = Models::new();
    models
        .define::<Activity>()
        .expect("activity model registration");
    models
});

/// All models known to the database. Registration happens once, at first use.
pub fn models() -> &'static Models {
    &MODELS
}

#[derive(Clone)]
pub struct Storage {
    inner_storage: Arc<Database<'static>>,
}

impl Storage {
    pub fn try_new(path: impl AsRef<Path>, models: &'static Models) -> eyre::Result<Self> {
        let builder = Builder::new();
        let db = builder.create(models, path)?;
        Ok(Self {
            inner_storage: Arc::new(db),
        })
    }

    /// Executes read-only operation within a transaction
    pub fn read_txn<F, R>(&self, f: F) -> eyre::Result<R>
    where
        F: FnOnce(transaction::RTransaction) -> eyre::Result<R>,
    {
        f(self.inner_storage.r_transaction()?)
    }

    /// Executes read-write operation within a transaction
    pub fn write_txn<F, R>(&self, f: F) -> eyre::Result<R>
    where
        F: FnOnce(&mut transaction::RwTransaction) -> eyre::Result<R>,
    {
        let mut txn = self.inner_storage.rw_transaction()?;
        match f(&mut txn) {
            Ok(result) => {
                txn.commit()?;
                Ok(result)
            }
            e => {
                // RwTransaction doesn't seem to implement drop, there may
                // be nested properties with it but w/e let's be safe and call abort.
                txn.abort()?;
                e
            }
        }
    }

    pub fn insert<T: ToInput>(&self, item: T) -> eyre::Result<()> {
        self.write_txn(|qr| Ok(qr.insert(item)?))
    }
}
