//! Paginated list collaborator.
//!
//! The list owns layout, virtualization and scroll physics. The gallery only
//! needs to command it and to hear back when it settles (see
//! [`GalleryOrchestrator::on_settle`](crate::GalleryOrchestrator::on_settle)).

use lightbox_core::RenderPass;
use serde::Serialize;

/// Commands the gallery issues to the horizontal, one-item-per-page list.
pub trait PaginatedList {
    /// Jump (without user-visible momentum) to `index`. Settles reported
    /// afterwards must carry `pass`.
    fn scroll_to_index(&mut self, index: usize, pass: RenderPass);

    /// Allow or block user-driven scrolling.
    fn set_scroll_enabled(&mut self, enabled: bool);

    /// The collection changed; render `count` pages for `pass`.
    fn set_item_count(&mut self, count: usize, pass: RenderPass);
}

/// A command received by [`RecordingList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ListCommand {
    ScrollTo { index: usize, pass: u64 },
    SetScrollEnabled { enabled: bool },
    SetItemCount { count: usize, pass: u64 },
}

/// Headless list that records every command. Used by the replay tool and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingList {
    commands: Vec<ListCommand>,
    scroll_enabled: bool,
    page: usize,
    pass: RenderPass,
}

impl RecordingList {
    pub fn new() -> Self {
        Self {
            scroll_enabled: true,
            ..Default::default()
        }
    }

    pub fn commands(&self) -> &[ListCommand] {
        &self.commands
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Page the list last jumped to.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Render pass of the window the list currently shows.
    pub fn pass(&self) -> RenderPass {
        self.pass
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PaginatedList for RecordingList {
    fn scroll_to_index(&mut self, index: usize, pass: RenderPass) {
        self.page = index;
        self.pass = pass;
        self.commands.push(ListCommand::ScrollTo {
            index,
            pass: pass.0,
        });
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
        self.commands.push(ListCommand::SetScrollEnabled { enabled });
    }

    fn set_item_count(&mut self, count: usize, pass: RenderPass) {
        self.pass = pass;
        self.commands.push(ListCommand::SetItemCount {
            count,
            pass: pass.0,
        });
    }
}
