use std::collections::HashMap;

use log::info;

use crate::{CacheNetId, ComponentKind, EntityId, WorldRefType};

use super::{
    component_cache::ComponentCache, data_cache::DataCache, error::CacheError,
    existence_tracking::ExistenceTrackingCache, fields::CacheFields,
};

type HostCacheBuilder = fn(&dyn WorldRefType, &EntityId) -> Result<Box<dyn DataCache>, CacheError>;
type ClientCacheBuilder = fn(&dyn WorldRefType, &EntityId) -> Box<dyn DataCache>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    /// The component is expected to exist for as long as the cache does
    Component,
    /// The component may be added or removed between ticks
    ExistenceTracking,
}

#[derive(Clone)]
struct CacheKindEntry {
    net_id: CacheNetId,
    name: &'static str,
    mode: CacheMode,
    host_builder: HostCacheBuilder,
    client_builder: ClientCacheBuilder,
}

/// Registry of cached component types, keyed by component kind.
///
/// Net ids are handed out in registration order, so host and client must
/// register the same caches in the same order.
#[derive(Clone, Default)]
pub struct CacheKinds {
    current_net_id: CacheNetId,
    kind_map: HashMap<ComponentKind, CacheKindEntry>,
    net_id_map: HashMap<CacheNetId, ComponentKind>,
}

impl CacheKinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if a cache for the same component type was already added.
    /// Consider using `try_add_cache` for non-panicking error handling.
    pub fn add_cache<F: CacheFields>(&mut self) {
        if let Err(error) = self.try_add_cache::<F>() {
            panic!("CacheKinds: {}", error);
        }
    }

    pub fn try_add_cache<F: CacheFields>(&mut self) -> Result<(), CacheError> {
        self.try_add_entry(
            ComponentKind::of::<F::Component>(),
            F::name(),
            CacheMode::Component,
            build_host_component_cache::<F>,
            build_client_component_cache::<F>,
        )
    }

    /// # Panics
    ///
    /// Panics if a cache for the same component type was already added.
    /// Consider using `try_add_existence_tracking_cache` for non-panicking error handling.
    pub fn add_existence_tracking_cache<F: CacheFields>(&mut self) {
        if let Err(error) = self.try_add_existence_tracking_cache::<F>() {
            panic!("CacheKinds: {}", error);
        }
    }

    pub fn try_add_existence_tracking_cache<F: CacheFields>(&mut self) -> Result<(), CacheError> {
        self.try_add_entry(
            ComponentKind::of::<F::Component>(),
            F::name(),
            CacheMode::ExistenceTracking,
            build_host_existence_cache::<F>,
            build_client_existence_cache::<F>,
        )
    }

    fn try_add_entry(
        &mut self,
        component_kind: ComponentKind,
        name: &'static str,
        mode: CacheMode,
        host_builder: HostCacheBuilder,
        client_builder: ClientCacheBuilder,
    ) -> Result<(), CacheError> {
        if self.kind_map.contains_key(&component_kind) {
            return Err(CacheError::KindAlreadyRegistered { name });
        }

        let net_id = self.current_net_id;
        info!("CacheKinds: registering {} cache {:?} with net id {}", name, mode, net_id);

        self.kind_map.insert(
            component_kind,
            CacheKindEntry {
                net_id,
                name,
                mode,
                host_builder,
                client_builder,
            },
        );
        self.net_id_map.insert(net_id, component_kind);
        self.current_net_id += 1;
        Ok(())
    }

    pub fn kind_to_net_id(&self, component_kind: &ComponentKind) -> Result<CacheNetId, CacheError> {
        self.kind_map
            .get(component_kind)
            .map(|entry| entry.net_id)
            .ok_or(CacheError::KindNotFound)
    }

    pub fn net_id_to_kind(&self, net_id: &CacheNetId) -> Result<ComponentKind, CacheError> {
        self.net_id_map
            .get(net_id)
            .copied()
            .ok_or(CacheError::UnknownNetId { net_id: *net_id })
    }

    pub fn kind_to_name(&self, component_kind: &ComponentKind) -> Option<&'static str> {
        self.kind_map.get(component_kind).map(|entry| entry.name)
    }

    pub fn mode(&self, component_kind: &ComponentKind) -> Option<CacheMode> {
        self.kind_map.get(component_kind).map(|entry| entry.mode)
    }

    /// All registered kinds, in net id order
    pub fn kinds(&self) -> Vec<ComponentKind> {
        let mut net_ids: Vec<&CacheNetId> = self.net_id_map.keys().collect();
        net_ids.sort();
        net_ids
            .into_iter()
            .map(|net_id| self.net_id_map[net_id])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.kind_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kind_map.is_empty()
    }

    pub fn build_host_cache(
        &self,
        component_kind: &ComponentKind,
        world: &dyn WorldRefType,
        entity: &EntityId,
    ) -> Result<Box<dyn DataCache>, CacheError> {
        let entry = self
            .kind_map
            .get(component_kind)
            .ok_or(CacheError::KindNotFound)?;
        (entry.host_builder)(world, entity)
    }

    pub fn build_client_cache(
        &self,
        component_kind: &ComponentKind,
        world: &dyn WorldRefType,
        entity: &EntityId,
    ) -> Result<Box<dyn DataCache>, CacheError> {
        let entry = self
            .kind_map
            .get(component_kind)
            .ok_or(CacheError::KindNotFound)?;
        Ok((entry.client_builder)(world, entity))
    }
}

fn build_host_component_cache<F: CacheFields>(
    world: &dyn WorldRefType,
    entity: &EntityId,
) -> Result<Box<dyn DataCache>, CacheError> {
    Ok(Box::new(ComponentCache::<F>::new(world, entity)?))
}

fn build_client_component_cache<F: CacheFields>(world: &dyn WorldRefType, entity: &EntityId) -> Box<dyn DataCache> {
    Box::new(ComponentCache::<F>::new_remote(world, entity))
}

fn build_host_existence_cache<F: CacheFields>(
    world: &dyn WorldRefType,
    entity: &EntityId,
) -> Result<Box<dyn DataCache>, CacheError> {
    Ok(Box::new(ExistenceTrackingCache::<F>::new(world, entity)))
}

fn build_client_existence_cache<F: CacheFields>(world: &dyn WorldRefType, entity: &EntityId) -> Box<dyn DataCache> {
    Box::new(ExistenceTrackingCache::<F>::new_remote(world, entity))
}
