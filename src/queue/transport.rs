use bitflags::bitflags;
use thiserror::Error;

use crate::ring::RingDescriptor;

/// Identifier of the execution context that owns a remote ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcId(pub u32);

/// Memory space within the remote context where the ring lives. The queue
/// never interprets it; it is routing information for the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemLocation(pub u32);

/// Address of an object inside the remote context's memory.
pub type RemoteAddr = u32;

/// Where a remote ring's descriptor and element array live.
///
/// Pure addressing data. Holding a `RemoteRegion` confers no ownership of the
/// memory it points at; the remote side manages that lifetime entirely, and
/// reads through it are only meaningful while the remote side keeps the ring
/// alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteRegion {
    pub proc: ProcId,
    pub location: MemLocation,
    pub desc_addr: RemoteAddr,
    pub elems_addr: RemoteAddr,
}

impl RemoteRegion {
    pub const fn new(
        proc: ProcId,
        location: MemLocation,
        desc_addr: RemoteAddr,
        elems_addr: RemoteAddr,
    ) -> Self {
        Self {
            proc,
            location,
            desc_addr,
            elems_addr,
        }
    }
}

bitflags! {
    /// Descriptor fields a transport load or store may leave untouched.
    ///
    /// Skipping fields bounds transport cost and, more importantly, keeps a
    /// store from clobbering fields the other side owns: an enqueue commits
    /// only `end`, a dequeue only `start`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldSkip: u8 {
        const CAPACITY = 1 << 0;
        const START    = 1 << 1;
        const END      = 1 << 2;
        const STEP     = 1 << 3;

        /// Store mask committing an enqueue: only `end` is written.
        const ALL_BUT_END = Self::CAPACITY.bits() | Self::START.bits() | Self::STEP.bits();

        /// Store mask committing a dequeue: only `start` is written.
        const ALL_BUT_START = Self::CAPACITY.bits() | Self::END.bits() | Self::STEP.bits();

        /// Load mask for size-only queries.
        const ALL_BUT_CAPACITY = Self::START.bits() | Self::END.bits() | Self::STEP.bits();
    }
}

/// Moves descriptor snapshots and single elements across the boundary to the
/// execution context holding a remote ring.
///
/// On a load, fields named in `skip` need not be fetched and may be left at
/// their `Default` values in the returned snapshot. On a store, fields named
/// in `skip` must not be written. A call either completes or fails; the queue
/// never retries internally, so implementations wanting deadlines or retries
/// apply them here.
pub trait Transport<T>
where
    T: Copy,
{
    type Error: core::fmt::Debug;

    fn load_descriptor(
        &mut self,
        region: &RemoteRegion,
        skip: FieldSkip,
    ) -> Result<RingDescriptor, Self::Error>;

    fn store_descriptor(
        &mut self,
        region: &RemoteRegion,
        desc: &RingDescriptor,
        skip: FieldSkip,
    ) -> Result<(), Self::Error>;

    fn read_element(&mut self, region: &RemoteRegion, index: u32) -> Result<T, Self::Error>;

    fn write_element(
        &mut self,
        region: &RemoteRegion,
        index: u32,
        item: T,
    ) -> Result<(), Self::Error>;
}

/// Transport for queues that never leave the local context.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoTransport;

/// Returned when a remote operation reaches [`NoTransport`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("queue has no transport bound")]
pub struct NoTransportError;

impl<T> Transport<T> for NoTransport
where
    T: Copy,
{
    type Error = NoTransportError;

    fn load_descriptor(
        &mut self,
        _region: &RemoteRegion,
        _skip: FieldSkip,
    ) -> Result<RingDescriptor, Self::Error> {
        Err(NoTransportError)
    }

    fn store_descriptor(
        &mut self,
        _region: &RemoteRegion,
        _desc: &RingDescriptor,
        _skip: FieldSkip,
    ) -> Result<(), Self::Error> {
        Err(NoTransportError)
    }

    fn read_element(&mut self, _region: &RemoteRegion, _index: u32) -> Result<T, Self::Error> {
        Err(NoTransportError)
    }

    fn write_element(
        &mut self,
        _region: &RemoteRegion,
        _index: u32,
        _item: T,
    ) -> Result<(), Self::Error> {
        Err(NoTransportError)
    }
}
