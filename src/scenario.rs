//! Scripted replay of a gallery session.
//!
//! A scenario is a JSON document holding options, items and an ordered list of
//! host inputs. Replaying it against a [`RecordingList`] yields a report of
//! every callback, list command and the final state, which is what the
//! `lightbox-replay` binary prints.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use lightbox_core::{Point, RenderPass, SettleEvent, TouchSample};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::config::GalleryOptions;
use crate::error::GalleryError;
use crate::item::{GalleryItem, ImageSource};
use crate::list::{ListCommand, RecordingList};
use crate::orchestrator::{GalleryCallbacks, GalleryOrchestrator};

/// One host input. Times are milliseconds since the start of the replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Fingers down at the given positions
    Touch { at_ms: u64, contacts: Vec<Point> },
    /// All fingers lifted
    Release { at_ms: u64 },
    /// Time passes with the fingers resting
    Tick { at_ms: u64 },
    ScrollBegin { index: usize },
    /// The list settles; `stale` tags it with the previous render pass
    Settle {
        index: usize,
        #[serde(default)]
        stale: bool,
    },
    SetImageIndex { index: usize },
    SetItems { items: Vec<GalleryItem> },
    SetVisible { visible: bool },
    RequestClose,
    OpacityFrame { value: f32 },
    SettleOpacity,
    SettleTransform,
    ToggleChrome { visible: bool },
    HideChrome { hidden: bool },
}

impl Step {
    fn at_ms(&self) -> Option<u64> {
        match self {
            Step::Touch { at_ms, .. } | Step::Release { at_ms } | Step::Tick { at_ms } => {
                Some(*at_ms)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub options: GalleryOptions,
    pub items: Vec<GalleryItem>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// State of the gallery after the last step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalState {
    pub rendered: bool,
    pub index: usize,
    pub opacity: f32,
    pub scale: f32,
    pub translate: Point,
    pub scroll_enabled: bool,
    pub chrome_visible: bool,
}

/// Everything observed during a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub index_changes: Vec<usize>,
    pub long_presses: Vec<ImageSource>,
    pub close_requests: usize,
    /// Claim returned for each touch, release and tick step
    pub claims: Vec<String>,
    pub list_commands: Vec<ListCommand>,
    pub final_state: FinalState,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self, GalleryError> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GalleryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scenario = Self::from_json_str(&json)?;
        log::info!(
            "Loaded scenario from {:?} ({} item(s), {} step(s))",
            path,
            scenario.items.len(),
            scenario.steps.len()
        );
        Ok(scenario)
    }

    /// Timestamps must never go backwards.
    pub fn validate(&self) -> Result<(), GalleryError> {
        self.options.validate()?;
        let mut last = 0;
        for (i, step) in self.steps.iter().enumerate() {
            if let Some(at_ms) = step.at_ms() {
                if at_ms < last {
                    return Err(GalleryError::invalid_scenario(format!(
                        "step {} at {}ms goes back in time (previous {}ms)",
                        i, at_ms, last
                    )));
                }
                last = at_ms;
            }
        }
        Ok(())
    }

    /// Run every step against a fresh gallery.
    pub fn replay(&self) -> Result<ReplayReport, GalleryError> {
        self.validate()?;

        let index_changes = Rc::new(RefCell::new(Vec::new()));
        let long_presses = Rc::new(RefCell::new(Vec::new()));
        let close_requests = Rc::new(RefCell::new(0));

        let callbacks = GalleryCallbacks::new()
            .on_image_index_change({
                let index_changes = Rc::clone(&index_changes);
                move |index| index_changes.borrow_mut().push(index)
            })
            .on_long_press({
                let long_presses = Rc::clone(&long_presses);
                move |image| long_presses.borrow_mut().push(image)
            })
            .on_request_close({
                let close_requests = Rc::clone(&close_requests);
                move |()| *close_requests.borrow_mut() += 1
            });

        let mut gallery = GalleryOrchestrator::new(
            self.items.clone(),
            self.options.clone(),
            RecordingList::new(),
            callbacks,
        )?;

        let start = Instant::now();
        let at = |ms: u64| start + Duration::from_millis(ms);
        let mut claims = Vec::new();

        for step in &self.steps {
            log::trace!("Replay: {:?}", step);
            match step {
                Step::Touch { at_ms, contacts } => {
                    let sample = TouchSample::new(at(*at_ms), contacts.clone());
                    let claim = gallery.handle_touch(&sample);
                    claims.push(format!("{:?}", claim));
                }
                Step::Release { at_ms } => {
                    let claim = gallery.handle_touch(&TouchSample::release(at(*at_ms)));
                    claims.push(format!("{:?}", claim));
                }
                Step::Tick { at_ms } => {
                    let claim = gallery.tick(at(*at_ms));
                    claims.push(format!("{:?}", claim));
                }
                Step::ScrollBegin { index } => gallery.on_scroll_begin(*index),
                Step::Settle { index, stale } => {
                    let pass = gallery.render_pass();
                    let pass = if *stale {
                        RenderPass(pass.0.saturating_sub(1))
                    } else {
                        pass
                    };
                    gallery.on_settle(SettleEvent {
                        index: *index,
                        pass,
                    });
                }
                Step::SetImageIndex { index } => gallery.set_image_index(*index),
                Step::SetItems { items } => gallery.set_items(items.clone()),
                Step::SetVisible { visible } => gallery.set_visible(*visible),
                Step::RequestClose => gallery.request_close(),
                Step::OpacityFrame { value } => gallery.on_opacity_frame(*value),
                Step::SettleOpacity => {
                    gallery.on_opacity_settled();
                }
                Step::SettleTransform => gallery.on_transform_settled(),
                Step::ToggleChrome { visible } => gallery.toggle_chrome(*visible),
                Step::HideChrome { hidden } => gallery.request_hide_chrome(*hidden),
            }
        }

        let transform = gallery.active_transform().unwrap_or_default();
        let final_state = FinalState {
            rendered: gallery.is_rendered(),
            index: gallery.current_index(),
            opacity: gallery.opacity(),
            scale: transform.scale,
            translate: transform.translate,
            scroll_enabled: gallery.is_scroll_enabled(),
            chrome_visible: gallery.chrome().is_visible(),
        };

        let report = ReplayReport {
            index_changes: index_changes.borrow().clone(),
            long_presses: long_presses.borrow().clone(),
            close_requests: *close_requests.borrow(),
            claims,
            list_commands: gallery.list().commands().to_vec(),
            final_state,
        };
        Ok(report)
    }
}
