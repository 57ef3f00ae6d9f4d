use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::{
    require,
    shared::error::{ContainerError, ContainerResult},
    utils::{Link, DEFAULT_CAPACITY},
};

/// Handle to one element's index in a [`DynamicArray`], stamped with the
/// buffer generation it was issued under.
///
/// Every operation that rebuilds the buffer (growth push, insert, erase,
/// clear) bumps the generation, after which all older positions are rejected
/// with `StalePosition` instead of silently reading relocated storage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    index: Link,
    generation: u32,
}

impl Position {
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// Contiguous-buffer sequence with an exact, observable capacity.
///
/// `slots` always holds exactly `capacity` elements; indices `[0, len)` are
/// live and the rest hold default values. Growth on a full push is by one
/// slot at a time, which makes n pushes cost O(n^2) overall; callers that
/// know their size pre-allocate with [`DynamicArray::with_capacity`].
#[derive(BorshSerialize, BorshDeserialize, Debug)]
pub struct DynamicArray<T> {
    slots: Vec<T>,
    len: u32,
    generation: u32,
}

impl<T> DynamicArray<T> {
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn capacity(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Bounds-checked element access.
    pub fn get(&self, n: u32) -> ContainerResult<&T> {
        require!(n < self.len, ContainerError::IndexOutOfRange)?;
        Ok(&self.slots[n as usize])
    }

    pub fn get_mut(&mut self, n: u32) -> ContainerResult<&mut T> {
        require!(n < self.len, ContainerError::IndexOutOfRange)?;
        Ok(&mut self.slots[n as usize])
    }

    pub fn front(&self) -> ContainerResult<&T> {
        require!(!self.is_empty(), ContainerError::EmptyContainer)?;
        Ok(&self.slots[0])
    }

    pub fn front_mut(&mut self) -> ContainerResult<&mut T> {
        require!(!self.is_empty(), ContainerError::EmptyContainer)?;
        Ok(&mut self.slots[0])
    }

    pub fn back(&self) -> ContainerResult<&T> {
        require!(!self.is_empty(), ContainerError::EmptyContainer)?;
        Ok(&self.slots[(self.len - 1) as usize])
    }

    pub fn back_mut(&mut self) -> ContainerResult<&mut T> {
        require!(!self.is_empty(), ContainerError::EmptyContainer)?;
        Ok(&mut self.slots[(self.len - 1) as usize])
    }

    /// Position of index 0 under the current generation. Equal to `end()`
    /// while the array is empty.
    pub fn begin(&self) -> Position {
        Position {
            index: 0,
            generation: self.generation,
        }
    }

    /// One-past-the-last position under the current generation.
    pub fn end(&self) -> Position {
        Position {
            index: self.len,
            generation: self.generation,
        }
    }

    /// Position naming index `n`; `n == len()` is the end position.
    pub fn position_of(&self, n: u32) -> ContainerResult<Position> {
        require!(n <= self.len, ContainerError::IndexOutOfRange)?;
        Ok(Position {
            index: n,
            generation: self.generation,
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let generation = self.generation;
        (0..self.len).map(move |index| Position { index, generation })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.live().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        let len = self.len as usize;
        self.slots[..len].iter_mut()
    }

    fn live(&self) -> &[T] {
        &self.slots[..self.len as usize]
    }

    /// Validates `pos` against the current generation and length, allowing
    /// the end position. Returns the raw index.
    fn check_position(&self, pos: Position) -> ContainerResult<u32> {
        require!(
            pos.generation == self.generation,
            ContainerError::StalePosition
        )?;
        require!(pos.index <= self.len, ContainerError::IndexOutOfRange)?;
        Ok(pos.index)
    }
}

impl<T: Default + Clone> DynamicArray<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Allocates `capacity` slots up front (at least one), all holding
    /// default values until pushed over.
    pub fn with_capacity(capacity: u32) -> Self {
        let capacity = capacity.max(1);
        DynamicArray {
            slots: (0..capacity).map(|_| T::default()).collect(),
            len: 0,
            generation: 0,
        }
    }

    /// Replaces the buffer with `rebuilt` padded out to `capacity` default
    /// slots, and retires every outstanding position.
    fn install(&mut self, mut rebuilt: Vec<T>, capacity: u32) {
        let len = rebuilt.len() as u32;
        debug_assert!(len <= capacity);
        while (rebuilt.len() as u32) < capacity {
            rebuilt.push(T::default());
        }
        self.slots = rebuilt;
        self.len = len;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Appends `value`. A full array first rebuilds into a buffer exactly
    /// one slot larger, which retires every outstanding position; a push
    /// with spare capacity keeps them all valid.
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            let capacity = self.capacity() + 1;
            let rebuilt = self.live().to_vec();
            self.install(rebuilt, capacity);
        }
        self.slots[self.len as usize] = value;
        self.len += 1;
    }

    /// Removes and returns the last element. Spare capacity is kept.
    pub fn pop_back(&mut self) -> ContainerResult<T> {
        require!(!self.is_empty(), ContainerError::EmptyContainer)?;
        self.len -= 1;
        Ok(std::mem::take(&mut self.slots[self.len as usize]))
    }

    /// Rebuilds the buffer with `value` placed immediately before `pos`
    /// (the end position appends), growing capacity by one iff the array
    /// was full. Returns the new element's position under the fresh
    /// generation.
    pub fn insert(&mut self, pos: Position, value: T) -> ContainerResult<Position> {
        let at = self.check_position(pos)?;

        let capacity = self.capacity() + u32::from(self.is_full());
        let mut rebuilt: Vec<T> = Vec::with_capacity(capacity as usize);
        rebuilt.extend_from_slice(&self.live()[..at as usize]);
        rebuilt.push(value);
        rebuilt.extend_from_slice(&self.live()[at as usize..]);
        self.install(rebuilt, capacity);

        Ok(Position {
            index: at,
            generation: self.generation,
        })
    }

    /// Rebuilds the buffer without the element at `pos`. Returns the
    /// removed value and the position now naming the element that followed
    /// it (or the end position).
    pub fn erase(&mut self, pos: Position) -> ContainerResult<(Position, T)> {
        require!(!self.is_empty(), ContainerError::EmptyContainer)?;
        let at = self.check_position(pos)?;
        require!(at < self.len, ContainerError::IndexOutOfRange)?;

        let removed = self.slots[at as usize].clone();
        let capacity = self.capacity();
        let mut rebuilt: Vec<T> = Vec::with_capacity(capacity as usize);
        rebuilt.extend_from_slice(&self.live()[..at as usize]);
        rebuilt.extend_from_slice(&self.live()[at as usize + 1..]);
        self.install(rebuilt, capacity);

        Ok((
            Position {
                index: at,
                generation: self.generation,
            },
            removed,
        ))
    }

    /// Rebuilds the buffer without the index range `[first, last)`. Both
    /// bounds must carry the current generation. An empty range leaves the
    /// buffer (and every outstanding position) untouched.
    pub fn erase_range(&mut self, first: Position, last: Position) -> ContainerResult<Position> {
        let start = self.check_position(first)?;
        let stop = self.check_position(last)?;
        require!(start <= stop, ContainerError::InvalidPosition)?;

        if start == stop {
            return Ok(first);
        }

        let capacity = self.capacity();
        let mut rebuilt: Vec<T> = Vec::with_capacity(capacity as usize);
        rebuilt.extend_from_slice(&self.live()[..start as usize]);
        rebuilt.extend_from_slice(&self.live()[stop as usize..]);
        self.install(rebuilt, capacity);

        Ok(Position {
            index: start,
            generation: self.generation,
        })
    }

    /// Releases the buffer and resets to a single default slot with length
    /// zero, not to the constructed capacity.
    pub fn clear(&mut self) {
        self.install(Vec::new(), DEFAULT_CAPACITY);
    }
}

impl<T: Default + Clone> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        DynamicArray {
            slots: self.slots.clone(),
            len: self.len,
            generation: self.generation,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for value in self.live() {
            write!(f, "{},", value)?;
        }
        write!(f, "}}")
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
