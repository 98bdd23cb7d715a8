//! # Home page state
//!
//! Everything the home page knows lives in one [`HomeState`] value, held in a
//! `Signal` by [`crate::views::HomeView`] and passed by reference to the flows
//! in [`crate::detection`] and [`crate::project`]:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `projects` | Sidebar list, newest first, as returned by the backend |
//! | `current_project` | The single active project, if any |
//! | `view` | Welcome page or detection panel |
//! | `panel` | Ordered blocks of the detection panel |
//! | `processing` | Page-wide "a detection is in flight" flag |
//!
//! `processing` lives on the page, not the panel: a panel replaced while a
//! request is in flight still refuses new submissions until that request
//! settles.

use api::{DetectionRecord, DetectionRequest, DetectionResult, Project};
use dioxus::prelude::*;

/// Identifier of an input block within one panel.
pub type BlockId = usize;

/// One visual block of the detection panel, top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Advertisement text box with its own submit control.
    Input {
        id: BlockId,
        text: String,
        editable: bool,
    },
    /// Spinner pair shown while a detection is running.
    Loading,
    /// Law analysis and rewrite suggestion for the input above.
    Result { law: String, advice: String },
    Divider,
}

/// The declarative content of the detection panel.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionPanel {
    blocks: Vec<Block>,
    next_id: BlockId,
}

impl Default for DetectionPanel {
    fn default() -> Self {
        Self::fresh()
    }
}

impl DetectionPanel {
    /// A panel holding a single empty, editable input.
    pub fn fresh() -> Self {
        let mut panel = Self {
            blocks: Vec::new(),
            next_id: 0,
        };
        let input = panel.new_input(String::new(), true);
        panel.blocks.push(input);
        panel
    }

    /// Rebuild a panel from a project's stored records.
    ///
    /// Each record renders as its read-only input followed by the result pair;
    /// records are separated by dividers, and the last one is followed by a
    /// divider and a fresh editable input. No records gives [`Self::fresh`].
    pub fn from_records(records: &[DetectionRecord]) -> Self {
        if records.is_empty() {
            return Self::fresh();
        }
        let mut panel = Self {
            blocks: Vec::new(),
            next_id: 0,
        };
        for record in records {
            let input = panel.new_input(record.input_ad.clone(), false);
            panel.blocks.push(input);
            panel.blocks.push(Block::Result {
                law: record.result_law.clone(),
                advice: record.result_advice.clone(),
            });
            panel.blocks.push(Block::Divider);
        }
        let input = panel.new_input(String::new(), true);
        panel.blocks.push(input);
        panel
    }

    fn new_input(&mut self, text: String, editable: bool) -> Block {
        let id = self.next_id;
        self.next_id += 1;
        Block::Input { id, text, editable }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    fn position(&self, block_id: BlockId) -> Option<usize> {
        self.blocks
            .iter()
            .position(|b| matches!(b, Block::Input { id, .. } if *id == block_id))
    }

    pub fn input_text(&self, block_id: BlockId) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Input { id, text, .. } if *id == block_id => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_editable(&self, block_id: BlockId) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b, Block::Input { id, editable: true, .. } if *id == block_id))
    }

    /// Update the text of an editable input. Read-only inputs are left alone.
    pub fn set_input_text(&mut self, block_id: BlockId, value: String) {
        for block in &mut self.blocks {
            if let Block::Input { id, text, editable } = block {
                if *id == block_id && *editable {
                    *text = value;
                    return;
                }
            }
        }
    }

    fn set_editable(&mut self, block_id: BlockId, value: bool) {
        for block in &mut self.blocks {
            if let Block::Input { id, editable, .. } = block {
                if *id == block_id {
                    *editable = value;
                }
            }
        }
    }

    pub fn has_loading(&self) -> bool {
        self.blocks.iter().any(|b| matches!(b, Block::Loading))
    }

    fn remove_loading(&mut self) {
        self.blocks.retain(|b| !matches!(b, Block::Loading));
    }

    /// Lock `block_id` and show the loading placeholder right below it.
    fn show_loading(&mut self, block_id: BlockId) {
        self.remove_loading();
        self.set_editable(block_id, false);
        if let Some(pos) = self.position(block_id) {
            self.blocks.insert(pos + 1, Block::Loading);
        }
    }

    /// Replace the placeholder with the result pair, a divider and a fresh input.
    fn append_result(&mut self, block_id: BlockId, result: DetectionResult) {
        self.remove_loading();
        let Some(pos) = self.position(block_id) else {
            return;
        };
        let input = self.new_input(String::new(), true);
        self.blocks.splice(
            pos + 1..pos + 1,
            [
                Block::Result {
                    law: result.result_law,
                    advice: result.result_advice,
                },
                Block::Divider,
                input,
            ],
        );
    }

    /// Drop the placeholder and hand the input back to the user.
    fn restore(&mut self, block_id: BlockId) {
        self.remove_loading();
        self.set_editable(block_id, true);
    }

    pub fn input_count(&self) -> usize {
        self.blocks.iter().filter(|b| matches!(b, Block::Input { .. })).count()
    }

    pub fn result_count(&self) -> usize {
        self.blocks.iter().filter(|b| matches!(b, Block::Result { .. })).count()
    }
}

/// What the main area of the home page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MainView {
    /// Getting-started page shown when there is no project.
    Welcome,
    #[default]
    Detection,
}

/// Why a detection submission did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Another detection is in flight.
    Busy,
    EmptyInput,
    NoProject,
    /// The input block no longer exists (panel was replaced).
    UnknownBlock,
}

/// A submission that passed validation and is now in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingDetection {
    pub request: DetectionRequest,
    pub block_id: BlockId,
    epoch: u64,
}

/// Page-level controller state of the home view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeState {
    pub projects: Vec<Project>,
    pub projects_loaded: bool,
    pub current_project: Option<String>,
    pub view: MainView,
    panel: DetectionPanel,
    panel_epoch: u64,
    processing: bool,
}

impl HomeState {
    pub fn panel(&self) -> &DetectionPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut DetectionPanel {
        &mut self.panel
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Swap the panel wholesale. In-flight detections keep the page busy but
    /// no longer write into the new panel.
    pub fn replace_panel(&mut self, panel: DetectionPanel) {
        self.panel = panel;
        self.panel_epoch += 1;
    }

    pub fn is_current(&self, project_id: &str) -> bool {
        self.current_project.as_deref() == Some(project_id)
    }

    /// Validate and start a submission of `block_id`.
    ///
    /// `url_project` is the `project_id` query parameter, consulted only when no
    /// project is selected in page state.
    pub fn begin_detection(
        &mut self,
        block_id: BlockId,
        url_project: Option<&str>,
    ) -> Result<PendingDetection, SubmitRejection> {
        if self.processing {
            return Err(SubmitRejection::Busy);
        }
        let input = self
            .panel
            .input_text(block_id)
            .ok_or(SubmitRejection::UnknownBlock)?
            .trim()
            .to_string();
        if input.is_empty() {
            return Err(SubmitRejection::EmptyInput);
        }
        let project_id = self
            .current_project
            .clone()
            .or_else(|| url_project.filter(|p| !p.is_empty()).map(str::to_string))
            .ok_or(SubmitRejection::NoProject)?;

        self.processing = true;
        self.panel.show_loading(block_id);
        Ok(PendingDetection {
            request: DetectionRequest {
                input_ad: input,
                project_id,
            },
            block_id,
            epoch: self.panel_epoch,
        })
    }

    pub fn complete_detection(&mut self, pending: &PendingDetection, result: DetectionResult) {
        self.processing = false;
        if pending.epoch == self.panel_epoch {
            self.panel.append_result(pending.block_id, result);
        }
    }

    pub fn fail_detection(&mut self, pending: &PendingDetection) {
        self.processing = false;
        if pending.epoch == self.panel_epoch {
            self.panel.restore(pending.block_id);
        }
    }
}

/// Mutable access to a [`HomeState`], whether it sits in a `Signal` (the
/// running app) or on the stack (tests).
pub trait StateCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut HomeState) -> R) -> R;
}

impl StateCell for HomeState {
    fn update<R>(&mut self, f: impl FnOnce(&mut HomeState) -> R) -> R {
        f(self)
    }
}

impl StateCell for Signal<HomeState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut HomeState) -> R) -> R {
        self.with_mut(f)
    }
}
