//! Exclusion flags for directory resolution.
//!
//! Callers pass a set of exclusions to drop whole classes of directories
//! from a result list. The empty set keeps everything.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Directory classes to leave out of a resolution result.
    ///
    /// Combine flags with `|`. A directory is dropped as soon as one of its
    /// classes is excluded, so `USER | ROAMING` drops roaming directories
    /// twice over and every other per-user directory once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct Exclude: u8 {
        /// Leave out roaming user-profile directories.
        ///
        /// Only meaningful on platforms with roaming profiles (Windows);
        /// elsewhere no catalog entry is marked roaming and the flag is a
        /// no-op.
        const ROAMING = 0b0000_0001;

        /// Leave out user-specific directories.
        const USER    = 0b0000_0010;

        /// Leave out system-wide directories.
        const SYSTEM  = 0b0000_0100;
    }
}

impl Default for Exclude {
    /// The default set excludes nothing.
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for Exclude {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Exclude {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

impl Exclude {
    /// Check whether roaming directories are excluded.
    pub const fn roaming(self) -> bool {
        self.contains(Self::ROAMING)
    }

    /// Check whether user-specific directories are excluded.
    pub const fn user(self) -> bool {
        self.contains(Self::USER)
    }

    /// Check whether system-wide directories are excluded.
    pub const fn system(self) -> bool {
        self.contains(Self::SYSTEM)
    }
}
