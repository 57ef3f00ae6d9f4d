use static_assertions::{const_assert, const_assert_eq};

use crate::shared::error::{ContainerError, ContainerResult};

/// The slot index that represents an element's address in a container's
/// backing storage. NIL as u32::MAX is used to ensure a fixed size for
/// serialization.
pub type Link = u32;
pub const NIL: Link = Link::MAX;

/// Capacity a [`DynamicArray`](crate::DynamicArray) starts with when none is
/// requested.
pub const DEFAULT_CAPACITY: u32 = 1;

// Slot bookkeeping assumes at least one slot and a fixed-width link encoding.
const_assert!(DEFAULT_CAPACITY >= 1);
const_assert_eq!(core::mem::size_of::<Link>(), 4);

#[inline(always)]
pub fn from_slot<E>(slots: &[E], slot: Link) -> ContainerResult<&E> {
    if slot == NIL {
        return Err(ContainerError::InvalidPosition);
    }
    slots
        .get(slot as usize)
        .ok_or(ContainerError::InvalidPosition)
}

#[inline(always)]
pub fn from_slot_mut<E>(slots: &mut [E], slot: Link) -> ContainerResult<&mut E> {
    if slot == NIL {
        return Err(ContainerError::InvalidPosition);
    }
    slots
        .get_mut(slot as usize)
        .ok_or(ContainerError::InvalidPosition)
}
