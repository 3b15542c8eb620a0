use std::collections::BTreeMap;

use log::{debug, info};

use tickcache_serde::{BitReader, BitWrite, Serde, UnsignedVariableInteger};

use crate::{HostType, Tick};

use super::{
    error::OperationMessageError,
    operation_message::{OperationMessageHandler, OperationMessageId},
};

/// Owns exactly one handler per operation message.
///
/// Built once at startup on both host and client and passed to whatever
/// needs to dispatch operation messages. No unregistration.
pub struct OperationMessageHandlerManager<M: OperationMessageId> {
    host_type: HostType,
    handlers: BTreeMap<M, Box<dyn OperationMessageHandler>>,
}

impl<M: OperationMessageId> OperationMessageHandlerManager<M> {
    pub fn new(host_type: HostType) -> Self {
        Self {
            host_type,
            handlers: BTreeMap::new(),
        }
    }

    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    /// Registers the handler for `id`, taking ownership of it
    ///
    /// # Panics
    ///
    /// Panics if `id` already has a handler.
    /// Consider using `try_register_handler` for non-panicking error handling.
    pub fn register_handler(&mut self, id: M, handler: Box<dyn OperationMessageHandler>) {
        if let Err(error) = self.try_register_handler(id, handler) {
            panic!("OperationMessageHandlerManager: {}", error);
        }
    }

    pub fn try_register_handler(
        &mut self,
        id: M,
        handler: Box<dyn OperationMessageHandler>,
    ) -> Result<(), OperationMessageError> {
        if self.handlers.contains_key(&id) {
            return Err(OperationMessageError::DuplicateHandler {
                message: format!("{:?}", id),
            });
        }

        info!("OperationMessageHandlerManager: registering handler for {:?}", id);
        self.handlers.insert(id, handler);
        Ok(())
    }

    /// Returns the handler for `id`. With `only_host` set, nothing is returned
    /// unless this manager runs on the host.
    pub fn get_handler_by_id(
        &mut self,
        id: M,
        only_host: bool,
    ) -> Option<&mut (dyn OperationMessageHandler + 'static)> {
        if only_host && !self.host_type.is_host() {
            return None;
        }
        self.handlers.get_mut(&id).map(|handler| handler.as_mut())
    }

    /// Typed lookup, `None` also when the handler for `id` is not an `H`
    pub fn get_handler<H: OperationMessageHandler>(&mut self, id: M, only_host: bool) -> Option<&mut H> {
        self.get_handler_by_id(id, only_host)?
            .as_any_mut()
            .downcast_mut::<H>()
    }

    pub fn has_handler(&self, id: &M) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn all_handlers(&self) -> impl Iterator<Item = (&M, &dyn OperationMessageHandler)> {
        self.handlers
            .iter()
            .map(|(id, handler)| (id, handler.as_ref()))
    }

    /// Writes `[1][net id][payload]` for every handler with queued data, then
    /// a terminating `0` bit. Returns how many messages were written.
    pub fn write_pending(&mut self, writer: &mut dyn BitWrite) -> usize {
        let mut written = 0;

        for (id, handler) in self.handlers.iter_mut() {
            if !handler.has_pending() {
                continue;
            }
            true.ser(writer);
            UnsignedVariableInteger::<4>::new(id.to_net_id()).ser(writer);
            handler.write_data(writer);
            written += 1;
        }
        false.ser(writer);

        if written > 0 {
            debug!("OperationMessageHandlerManager: wrote {} operation messages", written);
        }
        written
    }

    /// Dispatches every message in the stream to its handler
    pub fn read_messages(
        &mut self,
        reader: &mut BitReader,
        received_host_tick: Tick,
    ) -> Result<usize, OperationMessageError> {
        let mut read = 0;

        while bool::de(reader)? {
            let net_id = UnsignedVariableInteger::<4>::de(reader)?.to::<u16>()?;
            let id = M::from_net_id(net_id).ok_or(OperationMessageError::UnknownMessage { net_id })?;
            let handler = self.handlers.get_mut(&id).ok_or_else(|| {
                OperationMessageError::HandlerNotRegistered {
                    message: format!("{:?}", id),
                }
            })?;
            handler.read_data(reader, received_host_tick)?;
            read += 1;
        }

        Ok(read)
    }
}
