use crate::domain::agency::Agency;
use crate::domain::property::Property;
use crate::utils::error::{AgencyError, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe handle to one [`Agency`]. Mutations are serialized behind a
/// single write lock; readers see a consistent snapshot for the duration of
/// the closure passed to [`SharedAgency::read`].
#[derive(Debug, Clone)]
pub struct SharedAgency {
    inner: Arc<RwLock<Agency>>,
}

impl SharedAgency {
    pub fn new(agency: Agency) -> Self {
        Self {
            inner: Arc::new(RwLock::new(agency)),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&Agency) -> T) -> Result<T> {
        let guard = self.read_guard()?;
        Ok(f(&guard))
    }

    pub fn add_property(&self, property: Property) -> Result<()> {
        self.write_guard()?.add_property(property);
        Ok(())
    }

    pub fn remove_property(&self, property_id: &str) -> Result<Property> {
        self.write_guard()?.remove_property(property_id)
    }

    pub fn update_price(&self, property_id: &str, price_usd: f64) -> Result<()> {
        self.write_guard()?.update_price(property_id, price_usd)
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Agency>> {
        self.inner.read().map_err(|e| AgencyError::LockPoisoned {
            message: e.to_string(),
        })
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Agency>> {
        self.inner.write().map_err(|e| AgencyError::LockPoisoned {
            message: e.to_string(),
        })
    }
}

impl From<Agency> for SharedAgency {
    fn from(agency: Agency) -> Self {
        Self::new(agency)
    }
}
