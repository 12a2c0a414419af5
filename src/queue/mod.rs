mod transport;

pub use transport::{
    FieldSkip, MemLocation, NoTransport, NoTransportError, ProcId, RemoteAddr, RemoteRegion,
    Transport,
};

use crate::error::QueueError;
use crate::error::RingError;
use crate::ring::{Ring, RingDescriptor};

#[derive(Debug)]
enum Variant<T, X>
where
    T: Copy,
    X: Transport<T>,
{
    Local(Ring<T>),
    Remote { region: RemoteRegion, transport: X },
}

/// Non-blocking bounded FIFO handle over a ring that lives either in this
/// execution context or in a remote one reached through a [`Transport`].
///
/// The variant is fixed at construction. A local queue exclusively owns its
/// ring for its lifetime; a remote queue holds addressing data only, and
/// every operation on it round-trips the descriptor through the transport.
/// Dropping a local queue releases its ring; dropping a remote handle never
/// touches the remote memory.
///
/// A remote operation is a load → compute → partial-store cycle with no
/// atomicity across the cycle. Each store commits a single index — `end` for
/// enqueue, `start` for dequeue — so one producer on one side and one
/// consumer on the other own disjoint descriptor fields and cannot clobber
/// each other. Anything beyond a single producer and a single consumer per
/// direction is unsound against this scheme and must be serialized by the
/// caller.
#[derive(Debug)]
pub struct Queue<T, X = NoTransport>
where
    T: Copy,
    X: Transport<T>,
{
    variant: Variant<T, X>,
}

impl<T, X> Queue<T, X>
where
    T: Copy,
    X: Transport<T>,
{
    /// Local queue over a freshly allocated ring of `capacity` slots, of
    /// which `capacity - 1` are usable.
    pub fn local(capacity: u32) -> Result<Self, RingError>
    where
        T: Default,
    {
        Ok(Self {
            variant: Variant::Local(Ring::new(capacity)?),
        })
    }

    /// Local queue over a caller-supplied descriptor and element buffer.
    pub fn local_from_parts(desc: RingDescriptor, elems: Box<[T]>) -> Result<Self, RingError> {
        Ok(Self {
            variant: Variant::Local(Ring::from_parts(desc, elems)?),
        })
    }

    /// Handle to a ring owned by another execution context.
    ///
    /// Touches no remote memory: the remote side is responsible for having
    /// initialized its own descriptor and element storage before traffic
    /// starts.
    pub fn remote(region: RemoteRegion, transport: X) -> Self {
        Self {
            variant: Variant::Remote { region, transport },
        }
    }

    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self.variant, Variant::Local(_))
    }

    #[inline]
    pub fn is_remote(&self) -> bool {
        matches!(self.variant, Variant::Remote { .. })
    }

    /// Adds `item` at the back of the queue.
    ///
    /// Remotely this is one logical step in three transport operations: load
    /// the descriptor snapshot, write the element, store back only `end`. If
    /// the final store fails the element is already written but the
    /// descriptor update did not land, so the outcome is indeterminate:
    /// re-query state before retrying.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError<X::Error>> {
        match &mut self.variant {
            Variant::Local(ring) => {
                if ring.is_full() {
                    return Err(QueueError::Full);
                }

                ring.push(item);
                Ok(())
            }
            Variant::Remote { region, transport } => {
                let mut snapshot = transport
                    .load_descriptor(region, FieldSkip::STEP)
                    .map_err(QueueError::Transport)?;
                snapshot.validate()?;

                if snapshot.is_full() {
                    return Err(QueueError::Full);
                }

                transport
                    .write_element(region, snapshot.end(), item)
                    .map_err(QueueError::Transport)?;
                snapshot.advance_end();

                transport
                    .store_descriptor(region, &snapshot, FieldSkip::ALL_BUT_END)
                    .map_err(QueueError::Transport)?;
                Ok(())
            }
        }
    }

    /// Removes and returns the item at the front of the queue.
    ///
    /// The remote path mirrors [`enqueue`](Self::enqueue): load, read the
    /// element, store back only `start` — with the same indeterminate
    /// outcome if the final store fails.
    pub fn dequeue(&mut self) -> Result<T, QueueError<X::Error>> {
        match &mut self.variant {
            Variant::Local(ring) => {
                if ring.is_empty() {
                    return Err(QueueError::Empty);
                }

                Ok(ring.pop())
            }
            Variant::Remote { region, transport } => {
                let mut snapshot = transport
                    .load_descriptor(region, FieldSkip::STEP)
                    .map_err(QueueError::Transport)?;
                snapshot.validate()?;

                if snapshot.is_empty() {
                    return Err(QueueError::Empty);
                }

                let item = transport
                    .read_element(region, snapshot.start())
                    .map_err(QueueError::Transport)?;
                snapshot.advance_start();

                transport
                    .store_descriptor(region, &snapshot, FieldSkip::ALL_BUT_START)
                    .map_err(QueueError::Transport)?;
                Ok(item)
            }
        }
    }

    /// Returns the item at the front without consuming it. Never writes the
    /// descriptor, so on the wire a peek is indistinguishable from a pure
    /// read.
    pub fn peek(&mut self) -> Result<T, QueueError<X::Error>> {
        match &mut self.variant {
            Variant::Local(ring) => {
                if ring.is_empty() {
                    return Err(QueueError::Empty);
                }

                Ok(ring.peek())
            }
            Variant::Remote { region, transport } => {
                let snapshot = transport
                    .load_descriptor(region, FieldSkip::STEP)
                    .map_err(QueueError::Transport)?;
                snapshot.validate()?;

                if snapshot.is_empty() {
                    return Err(QueueError::Empty);
                }

                transport
                    .read_element(region, snapshot.start())
                    .map_err(QueueError::Transport)
            }
        }
    }

    pub fn is_empty(&mut self) -> Result<bool, QueueError<X::Error>> {
        match &mut self.variant {
            Variant::Local(ring) => Ok(ring.is_empty()),
            Variant::Remote { region, transport } => {
                let snapshot = transport
                    .load_descriptor(region, FieldSkip::STEP)
                    .map_err(QueueError::Transport)?;
                Ok(snapshot.is_empty())
            }
        }
    }

    pub fn is_full(&mut self) -> Result<bool, QueueError<X::Error>> {
        match &mut self.variant {
            Variant::Local(ring) => Ok(ring.is_full()),
            Variant::Remote { region, transport } => {
                let snapshot = transport
                    .load_descriptor(region, FieldSkip::STEP)
                    .map_err(QueueError::Transport)?;
                snapshot.validate()?;
                Ok(snapshot.is_full())
            }
        }
    }

    /// Number of items currently held.
    pub fn used_space(&mut self) -> Result<u32, QueueError<X::Error>> {
        match &mut self.variant {
            Variant::Local(ring) => Ok(ring.len()),
            Variant::Remote { region, transport } => {
                let snapshot = transport
                    .load_descriptor(region, FieldSkip::STEP)
                    .map_err(QueueError::Transport)?;
                snapshot.validate()?;
                Ok(snapshot.len())
            }
        }
    }

    /// Number of further items the queue can accept.
    pub fn free_space(&mut self) -> Result<u32, QueueError<X::Error>> {
        match &mut self.variant {
            Variant::Local(ring) => Ok(ring.descriptor().free_len()),
            Variant::Remote { region, transport } => {
                let snapshot = transport
                    .load_descriptor(region, FieldSkip::STEP)
                    .map_err(QueueError::Transport)?;
                snapshot.validate()?;
                Ok(snapshot.free_len())
            }
        }
    }

    /// Maximum number of items the queue can hold at once, constant for the
    /// queue's lifetime. The remote path fetches only the capacity field.
    pub fn usable_size(&mut self) -> Result<u32, QueueError<X::Error>> {
        match &mut self.variant {
            Variant::Local(ring) => Ok(ring.usable_capacity()),
            Variant::Remote { region, transport } => {
                let snapshot = transport
                    .load_descriptor(region, FieldSkip::ALL_BUT_CAPACITY)
                    .map_err(QueueError::Transport)?;
                Ok(snapshot.usable_capacity())
            }
        }
    }
}
