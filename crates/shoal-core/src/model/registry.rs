use crate::{
    error::{ErrorClass, PipelineError},
    model::descriptor::ModelDescriptor,
};
use std::{
    any::{TypeId, type_name},
    collections::HashMap,
    sync::Arc,
};
use thiserror::Error as ThisError;

///
/// ModelRegistryError
///

#[derive(Debug, ThisError)]
pub enum ModelRegistryError {
    #[error("model '{0}' not registered")]
    ModelNotRegistered(String),

    #[error("model '{0}' already registered")]
    ModelAlreadyRegistered(String),
}

impl ModelRegistryError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::ModelNotRegistered(_) | Self::ModelAlreadyRegistered(_) => ErrorClass::Contract,
        }
    }
}

impl From<ModelRegistryError> for PipelineError {
    fn from(err: ModelRegistryError) -> Self {
        Self::new(err.class(), err.to_string())
    }
}

///
/// ModelRegistry
///
/// Explicit side-table of model descriptors keyed by type identity.
/// Replaces hidden reflection-based per-type directive storage: declaration
/// code registers a descriptor once, and every pipeline layer resolves
/// metadata through the registry.
///

#[derive(Default)]
pub struct ModelRegistry {
    models: HashMap<TypeId, Arc<ModelDescriptor>>,
}

impl ModelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the descriptor for model type `M`. Duplicate registration is
    /// rejected so directive capture stays declaration-time-only.
    pub fn register<M: 'static>(
        &mut self,
        descriptor: ModelDescriptor,
    ) -> Result<Arc<ModelDescriptor>, PipelineError> {
        let key = TypeId::of::<M>();
        if self.models.contains_key(&key) {
            return Err(
                ModelRegistryError::ModelAlreadyRegistered(type_name::<M>().to_string()).into(),
            );
        }

        let descriptor = Arc::new(descriptor);
        self.models.insert(key, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Look up the descriptor for model type `M`.
    #[must_use]
    pub fn descriptor<M: 'static>(&self) -> Option<Arc<ModelDescriptor>> {
        self.models.get(&TypeId::of::<M>()).cloned()
    }

    /// Look up the descriptor for model type `M`, failing with a contract
    /// error when the model was never registered.
    pub fn try_descriptor<M: 'static>(&self) -> Result<Arc<ModelDescriptor>, PipelineError> {
        self.descriptor::<M>()
            .ok_or_else(|| ModelRegistryError::ModelNotRegistered(type_name::<M>().to_string()).into())
    }

    /// Iterate registered descriptors in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ModelDescriptor>> {
        self.models.values()
    }
}
