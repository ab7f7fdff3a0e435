//! Single source of truth for the current gallery index.
//!
//! Reconciles three inputs: the caller's `image_index` prop, settle events from
//! the paginated list, and collection changes. Only user-driven settles ever
//! produce an [`IndexChange`].

/// Generation of the list's rendered window.
///
/// Every programmatic jump or collection change starts a new pass; settle
/// events tagged with an older pass are stale and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RenderPass(pub u64);

impl RenderPass {
    fn next(self) -> Self {
        RenderPass(self.0 + 1)
    }
}

/// The list came to rest on `index` after a user-driven scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleEvent {
    pub index: usize,
    pub pass: RenderPass,
}

/// A settled change of the current index, to be reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
}

/// Command for the list after a programmatic index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTo {
    pub index: usize,
    pub pass: RenderPass,
}

#[derive(Debug, Clone)]
pub struct IndexSynchronizer {
    current: usize,
    pending: Option<usize>,
    item_count: usize,
    pass: RenderPass,
}

impl IndexSynchronizer {
    /// Start at `start_index`, clamped into the collection. Never notifies.
    pub fn new(start_index: usize, item_count: usize) -> Self {
        let current = clamp_index(start_index, item_count);
        if current != start_index {
            log::warn!(
                "Index: start index {} out of range for {} item(s), using {}",
                start_index,
                item_count,
                current
            );
        }
        Self {
            current,
            pending: None,
            item_count,
            pass: RenderPass::default(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn pass(&self) -> RenderPass {
        self.pass
    }

    /// The caller changed the `image_index` prop.
    ///
    /// Forces the index, drops any in-flight settle and starts a new render pass.
    /// Returns the jump the list must perform; never produces a notification.
    pub fn set_external_index(&mut self, index: usize) -> JumpTo {
        let index = clamp_index(index, self.item_count);
        self.current = index;
        self.pending = None;
        self.pass = self.pass.next();
        log::debug!("Index: external jump to {} (pass {})", index, self.pass.0);
        JumpTo {
            index,
            pass: self.pass,
        }
    }

    /// The list reports a user-driven scroll heading towards `index`.
    pub fn begin_scroll(&mut self, index: usize) {
        if index < self.item_count {
            self.pending = Some(index);
        }
    }

    /// The list settled on an index.
    ///
    /// Returns a change exactly when a valid, current-pass settle moves the index.
    pub fn on_settle(&mut self, event: SettleEvent) -> Option<IndexChange> {
        if event.pass != self.pass {
            log::debug!(
                "Index: discarding stale settle on {} (pass {} != {})",
                event.index,
                event.pass.0,
                self.pass.0
            );
            return None;
        }
        if event.index >= self.item_count {
            log::warn!(
                "Index: discarding settle on {} with only {} item(s)",
                event.index,
                self.item_count
            );
            return None;
        }

        if self.pending == Some(event.index) {
            self.pending = None;
        }

        let previous = self.current;
        if event.index == previous {
            return None;
        }
        self.current = event.index;
        log::debug!("Index: settled {} -> {}", previous, event.index);
        Some(IndexChange {
            previous,
            current: event.index,
        })
    }

    /// The collection changed size. Starts a new pass and clamps silently.
    pub fn set_item_count(&mut self, item_count: usize) -> RenderPass {
        self.item_count = item_count;
        self.pass = self.pass.next();
        self.current = clamp_index(self.current, item_count);
        if self.pending.is_some_and(|p| p >= item_count) {
            self.pending = None;
        }
        self.pass
    }
}

fn clamp_index(index: usize, item_count: usize) -> usize {
    index.min(item_count.saturating_sub(1))
}
