//! Resident profile use cases.

use std::sync::Arc;

use blan_core::channel::{names, StateChannel};
use blan_core::profile::Profile;
use blan_core::store::KeyValueStore;
use blan_core::Result;

use crate::seeds;

/// Use-case service over the single-document profile channel.
///
/// The profile is mutated wholesale: the editor saves the full document
/// and the last full write wins.
pub struct ProfileService {
    channel: StateChannel<Profile>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            channel: StateChannel::new(names::PROFILE, store),
        }
    }

    /// The stored profile, or the seed default on first load.
    pub async fn load(&self) -> Profile {
        self.channel.load(seeds::default_profile()).await
    }

    /// Saves the full profile document.
    pub async fn save(&self, profile: &Profile) -> Result<()> {
        self.channel.save(profile).await
    }
}
