//! Filesystem-backed JSON persistence for the record collections.
//!
//! One pretty-printed file per collection under a single directory. Reads
//! degrade to empty collections on missing or corrupt files; writes replace
//! the whole collection through a temp file and rename.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use rentfolio_core::{CoreError, RecordStore};
use rentfolio_domain::{Expense, Payment, Property, Reminder, Tenant};

const COLLECTION_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

const PROPERTIES: &str = "properties";
const TENANTS: &str = "tenants";
const PAYMENTS: &str = "payments";
const EXPENSES: &str = "expenses";
const REMINDERS: &str = "reminders";

const COLLECTIONS: [&str; 5] = [PROPERTIES, TENANTS, PAYMENTS, EXPENSES, REMINDERS];

/// Directory of JSON collection files acting as the app's key-value store.
#[derive(Debug, Clone)]
pub struct JsonVault {
    root: PathBuf,
}

impl JsonVault {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn collection_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", name, COLLECTION_EXTENSION))
    }

    /// Removes every collection file. Missing files are not an error.
    pub fn clear_all(&self) -> Result<(), CoreError> {
        for name in COLLECTIONS {
            let path = self.collection_path(name);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let path = self.collection_path(name);
        if !path.exists() {
            return Vec::new();
        }
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                warn!(collection = name, %err, "collection unreadable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(err) => {
                warn!(collection = name, %err, "collection corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(&self, name: &str, records: &[T]) -> Result<(), CoreError> {
        let path = self.collection_path(name);
        let data = serde_json::to_string_pretty(records)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_file(&tmp, &data)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl RecordStore for JsonVault {
    fn load_properties(&self) -> Vec<Property> {
        self.load_collection(PROPERTIES)
    }

    fn save_properties(&self, properties: &[Property]) -> Result<(), CoreError> {
        self.save_collection(PROPERTIES, properties)
    }

    fn load_tenants(&self) -> Vec<Tenant> {
        self.load_collection(TENANTS)
    }

    fn save_tenants(&self, tenants: &[Tenant]) -> Result<(), CoreError> {
        self.save_collection(TENANTS, tenants)
    }

    fn load_payments(&self) -> Vec<Payment> {
        self.load_collection(PAYMENTS)
    }

    fn save_payments(&self, payments: &[Payment]) -> Result<(), CoreError> {
        self.save_collection(PAYMENTS, payments)
    }

    fn load_expenses(&self) -> Vec<Expense> {
        self.load_collection(EXPENSES)
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<(), CoreError> {
        self.save_collection(EXPENSES, expenses)
    }

    fn load_reminders(&self) -> Vec<Reminder> {
        self.load_collection(REMINDERS)
    }

    fn save_reminders(&self, reminders: &[Reminder]) -> Result<(), CoreError> {
        self.save_collection(REMINDERS, reminders)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
