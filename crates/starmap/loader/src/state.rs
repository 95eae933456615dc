//! Process-wide holder for the most recently loaded dataset.
use std::sync::{Arc, RwLock};

use starmap_core::{Jump, System};

use crate::error::{LoaderError, Result};

/// Shared slot for loaded systems and jumps.
///
/// Readers receive `Arc` handles, so publishing a new dataset never
/// invalidates a forest someone is still walking.
#[derive(Debug, Default)]
pub struct DatasetState {
    systems: RwLock<Option<Arc<[System]>>>,
    jumps: RwLock<Option<Arc<[Jump]>>>,
}

impl DatasetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_systems(&self, systems: Arc<[System]>) -> Result<()> {
        let mut slot = self.systems.write().map_err(|_| LoaderError::LockPoisoned)?;
        *slot = Some(systems);
        Ok(())
    }

    pub fn systems(&self) -> Result<Option<Arc<[System]>>> {
        let slot = self.systems.read().map_err(|_| LoaderError::LockPoisoned)?;
        Ok(slot.clone())
    }

    pub fn set_jumps(&self, jumps: impl Into<Arc<[Jump]>>) -> Result<()> {
        let mut slot = self.jumps.write().map_err(|_| LoaderError::LockPoisoned)?;
        *slot = Some(jumps.into());
        Ok(())
    }

    pub fn jumps(&self) -> Result<Option<Arc<[Jump]>>> {
        let slot = self.jumps.read().map_err(|_| LoaderError::LockPoisoned)?;
        Ok(slot.clone())
    }

    pub fn clear_systems(&self) -> Result<()> {
        *self.systems.write().map_err(|_| LoaderError::LockPoisoned)? = None;
        Ok(())
    }

    pub fn clear_jumps(&self) -> Result<()> {
        *self.jumps.write().map_err(|_| LoaderError::LockPoisoned)? = None;
        Ok(())
    }

    /// Forgets both systems and jumps.
    pub fn clear(&self) -> Result<()> {
        self.clear_systems()?;
        self.clear_jumps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starmap_core::{Position, SystemId};

    #[test]
    fn set_get_clear() {
        let state = DatasetState::new();
        assert!(state.systems().unwrap().is_none());

        let systems: Arc<[System]> =
            Arc::from(vec![System::new(SystemId(1), "Alpha", Position::default())]);
        state.set_systems(Arc::clone(&systems)).unwrap();
        state
            .set_jumps(vec![Jump::new(SystemId(1), SystemId(2))])
            .unwrap();

        assert!(Arc::ptr_eq(&state.systems().unwrap().unwrap(), &systems));
        assert_eq!(state.jumps().unwrap().unwrap().len(), 1);

        state.clear_jumps().unwrap();
        assert!(state.systems().unwrap().is_some());
        assert!(state.jumps().unwrap().is_none());

        state.clear().unwrap();
        assert!(state.systems().unwrap().is_none());
        assert!(state.jumps().unwrap().is_none());
    }
}
