use crate::tokens::{Token, TokenStore};
use crate::types::CloneLocation;

/// The seen map: every line start with at least `clone_tokens` tokens left
/// in its file, ordered by the content of those k tokens. Equal-content runs
/// are the map's entries; the stable sort keeps members of a run in file
/// arrival order.
pub(crate) struct SeenMap<'a> {
    pub(crate) store: &'a TokenStore,
    pub(crate) clone_tokens: usize,
    sites: Vec<CloneLocation>,
}

pub(crate) fn seed_tokens<'t>(
    store: &'t TokenStore,
    clone_tokens: usize,
    location: &CloneLocation,
) -> &'t [Token] {
    let begin = location.begin() as usize;
    &store.file(location.file_id()).tokens()[begin..begin + clone_tokens]
}

impl<'a> SeenMap<'a> {
    pub(crate) fn build(store: &'a TokenStore, clone_tokens: usize) -> SeenMap<'a> {
        let mut sites = Vec::new();
        for (file_id, file) in store.files().iter().enumerate() {
            for line in 0..file.line_count() {
                if file.line_is_empty(line) {
                    continue;
                }
                if file.remaining_tokens(line) < clone_tokens {
                    continue;
                }
                sites.push(CloneLocation::new(file_id as u32, file.line_start(line) as u32));
            }
        }
        sites.sort_by(|a, b| {
            seed_tokens(store, clone_tokens, a).cmp(seed_tokens(store, clone_tokens, b))
        });
        SeenMap {
            store,
            clone_tokens,
            sites,
        }
    }

    /// Drop entries with a single location; they cannot be clones. Also
    /// releases the capacity the dropped entries occupied.
    pub(crate) fn prune(&mut self) {
        let store = self.store;
        let clone_tokens = self.clone_tokens;
        let mut kept = Vec::new();
        for run in self
            .sites
            .chunk_by(|a, b| seed_tokens(store, clone_tokens, a) == seed_tokens(store, clone_tokens, b))
        {
            if run.len() > 1 {
                kept.extend_from_slice(run);
            }
        }
        kept.shrink_to_fit();
        self.sites = kept;
    }

    /// Entries in content order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = &[CloneLocation]> {
        self.sites.chunk_by(|a, b| {
            seed_tokens(self.store, self.clone_tokens, a)
                == seed_tokens(self.store, self.clone_tokens, b)
        })
    }

    /// Number of distinct k-gram keys currently held.
    pub(crate) fn site_count(&self) -> usize {
        self.entries().count()
    }

    /// Locations across entries that hold more than one of them.
    pub(crate) fn candidate_count(&self) -> usize {
        self.entries()
            .filter(|run| run.len() > 1)
            .map(<[CloneLocation]>::len)
            .sum()
    }
}
