// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Stable identity of a single editable line.
///
/// Ids are handed out by a [`LineIdAllocator`] owned by the session. They
/// survive edits to the line's text and check state, carry no ordering
/// meaning beyond "allocated later", and never collide with ids issued
/// earlier by the same allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u64);

impl LineId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l:{:04}", self.0)
    }
}

/// Monotonic line-id source, one per session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineIdAllocator {
    next: u64,
}

impl LineIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> LineId {
        let id = LineId::from_raw(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::LineIdAllocator;

    #[test]
    fn allocator_is_monotonic_and_collision_free() {
        let mut ids = LineIdAllocator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
        assert_ne!(a, c);
    }

    #[test]
    fn display_is_padded() {
        let mut ids = LineIdAllocator::new();
        assert_eq!(ids.next_id().to_string(), "l:0000");
        assert_eq!(ids.next_id().to_string(), "l:0001");
    }
}
