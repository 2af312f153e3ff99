use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::content::ProjectRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Lightbox sub-state of the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Viewing(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalAction {
    Open(Rc<ProjectRecord>),
    /// A card was chosen. Ignored while the detail view is already open.
    Select(Rc<ProjectRecord>),
    Close,
    OpenScreenshot(usize),
    CloseScreenshot,
    Step(Direction),
}

impl ModalAction {
    fn label(&self) -> &'static str {
        match self {
            ModalAction::Open(_) => "open",
            ModalAction::Select(_) => "select",
            ModalAction::Close => "close",
            ModalAction::OpenScreenshot(_) => "open_screenshot",
            ModalAction::CloseScreenshot => "close_screenshot",
            ModalAction::Step(Direction::Previous) => "step_previous",
            ModalAction::Step(Direction::Next) => "step_next",
        }
    }
}

/// Which project is shown in the detail view and which of its screenshots,
/// if any, is enlarged. `selected_screenshot` is only ever `Some` while a
/// project is active, and always indexes into that project's gallery.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    active_project: Option<Rc<ProjectRecord>>,
    selected_screenshot: Option<usize>,
}

impl ModalState {
    pub fn active_project(&self) -> Option<&Rc<ProjectRecord>> {
        self.active_project.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active_project.is_some()
    }

    pub fn selected_screenshot(&self) -> Option<usize> {
        self.selected_screenshot
    }

    pub fn lightbox(&self) -> LightboxState {
        match self.selected_screenshot {
            Some(index) => LightboxState::Viewing(index),
            None => LightboxState::Closed,
        }
    }

    /// The listing behind the detail view takes no input while this holds.
    pub fn background_inert(&self) -> bool {
        self.is_open()
    }

    /// Lightbox key bindings are live only while a screenshot is viewed.
    pub fn keys_active(&self) -> bool {
        matches!(self.lightbox(), LightboxState::Viewing(_))
    }

    fn screenshot_count(&self) -> usize {
        self.active_project
            .as_ref()
            .map_or(0, |project| project.screenshots().len())
    }

    /// Each operation returns whether the state changed.
    pub fn open(&mut self, project: Rc<ProjectRecord>) -> bool {
        let unchanged = self.selected_screenshot.is_none()
            && self
                .active_project
                .as_ref()
                .map_or(false, |current| Rc::ptr_eq(current, &project));
        self.active_project = Some(project);
        self.selected_screenshot = None;
        !unchanged
    }

    pub fn select(&mut self, project: Rc<ProjectRecord>) -> bool {
        if self.background_inert() {
            debug!("ignoring selection of {} behind open detail view", project.id);
            return false;
        }
        self.open(project)
    }

    pub fn close(&mut self) -> bool {
        let changed = self.active_project.is_some() || self.selected_screenshot.is_some();
        self.active_project = None;
        self.selected_screenshot = None;
        changed
    }

    pub fn open_screenshot(&mut self, index: usize) -> bool {
        if index >= self.screenshot_count() {
            debug!("ignoring screenshot {} outside gallery of {}", index, self.screenshot_count());
            return false;
        }
        let changed = self.selected_screenshot != Some(index);
        self.selected_screenshot = Some(index);
        changed
    }

    pub fn close_screenshot(&mut self) -> bool {
        self.selected_screenshot.take().is_some()
    }

    /// Clamped at both ends; never wraps.
    pub fn step_screenshot(&mut self, direction: Direction) -> bool {
        let Some(current) = self.selected_screenshot else {
            return false;
        };
        let next = match direction {
            Direction::Previous => current.checked_sub(1),
            Direction::Next => Some(current + 1).filter(|&i| i < self.screenshot_count()),
        };
        match next {
            Some(index) => {
                self.selected_screenshot = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, action: ModalAction) -> bool {
        match action {
            ModalAction::Open(project) => self.open(project),
            ModalAction::Select(project) => self.select(project),
            ModalAction::Close => self.close(),
            ModalAction::OpenScreenshot(index) => self.open_screenshot(index),
            ModalAction::CloseScreenshot => self.close_screenshot(),
            ModalAction::Step(direction) => self.step_screenshot(direction),
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let label = action.label();
        let mut next = (*self).clone();
        if next.apply(action) {
            debug!("modal transition {} -> {:?}", label, next.lightbox());
            Rc::new(next)
        } else {
            self
        }
    }
}

/// "2 / 5" style position label for the lightbox.
pub fn counter_label(index: usize, count: usize) -> String {
    format!("{} / {}", index + 1, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample_project;

    fn project(shots: &[&str]) -> Rc<ProjectRecord> {
        Rc::new(sample_project("p", shots))
    }

    fn viewing(shots: &[&str], index: usize) -> ModalState {
        let mut state = ModalState::default();
        state.open(project(shots));
        assert!(state.open_screenshot(index));
        state
    }

    #[test]
    fn starts_closed() {
        let state = ModalState::default();
        assert!(!state.is_open());
        assert_eq!(state.lightbox(), LightboxState::Closed);
    }

    #[test]
    fn open_then_close_clears_everything() {
        let mut state = viewing(&["a.png", "b.png"], 1);
        state.close();
        assert_eq!(state, ModalState::default());

        let mut fresh = ModalState::default();
        fresh.open(project(&[]));
        fresh.close();
        assert_eq!(fresh, ModalState::default());
    }

    #[test]
    fn close_when_already_closed_is_a_no_op() {
        let mut state = ModalState::default();
        assert!(!state.close());
        assert_eq!(state, ModalState::default());
    }

    #[test]
    fn opening_another_project_resets_the_lightbox() {
        let mut state = viewing(&["a.png", "b.png"], 1);
        let other = Rc::new(sample_project("other", &["z.png"]));
        assert!(state.open(other.clone()));
        assert!(Rc::ptr_eq(state.active_project().unwrap(), &other));
        assert_eq!(state.selected_screenshot(), None);
    }

    #[test]
    fn stepping_forward_clamps_at_last_screenshot() {
        let shots = ["1.png", "2.png", "3.png", "4.png"];
        let mut state = viewing(&shots, 0);
        for _ in 0..shots.len() - 1 {
            assert!(state.step_screenshot(Direction::Next));
        }
        assert_eq!(state.lightbox(), LightboxState::Viewing(3));

        assert!(!state.step_screenshot(Direction::Next));
        assert_eq!(state.lightbox(), LightboxState::Viewing(3));
    }

    #[test]
    fn stepping_back_from_first_screenshot_stays_put() {
        let mut state = viewing(&["a.png", "b.png"], 0);
        assert!(!state.step_screenshot(Direction::Previous));
        assert_eq!(state.selected_screenshot(), Some(0));
    }

    #[test]
    fn forward_sequence_from_middle_of_three() {
        let mut state = viewing(&["a.png", "b.png", "c.png"], 1);
        let mut seen = vec![state.selected_screenshot().unwrap()];
        for _ in 0..3 {
            state.step_screenshot(Direction::Next);
            seen.push(state.selected_screenshot().unwrap());
        }
        assert_eq!(seen, vec![1, 2, 2, 2]);
    }

    #[test]
    fn out_of_range_screenshot_is_ignored() {
        let mut state = viewing(&["a.png", "b.png", "c.png"], 2);
        assert!(!state.open_screenshot(3));
        assert!(!state.open_screenshot(usize::MAX));
        assert_eq!(state.selected_screenshot(), Some(2));
    }

    #[test]
    fn screenshot_needs_an_open_project_with_a_gallery() {
        let mut closed = ModalState::default();
        assert!(!closed.open_screenshot(0));
        assert_eq!(closed.selected_screenshot(), None);

        let mut no_gallery = ModalState::default();
        no_gallery.open(project(&[]));
        assert!(!no_gallery.open_screenshot(0));
        assert_eq!(no_gallery.lightbox(), LightboxState::Closed);
    }

    #[test]
    fn stepping_without_selection_is_a_no_op() {
        let mut state = ModalState::default();
        assert!(!state.step_screenshot(Direction::Next));
        assert!(!state.step_screenshot(Direction::Previous));

        state.open(project(&["a.png", "b.png"]));
        assert!(!state.step_screenshot(Direction::Next));
        assert_eq!(state.selected_screenshot(), None);
    }

    #[test]
    fn closing_screenshot_keeps_project_open() {
        let mut state = viewing(&["a.png"], 0);
        assert!(state.close_screenshot());
        assert!(state.is_open());
        assert_eq!(state.lightbox(), LightboxState::Closed);
        assert!(!state.close_screenshot());
    }

    #[test]
    fn reducer_returns_same_rc_when_nothing_changes() {
        let state = Rc::new(ModalState::default());
        let next = state.clone().reduce(ModalAction::Step(Direction::Next));
        assert!(Rc::ptr_eq(&state, &next));

        let opened = state.reduce(ModalAction::Open(project(&["a.png"])));
        assert!(opened.is_open());
        let shown = opened.reduce(ModalAction::OpenScreenshot(0));
        assert_eq!(shown.lightbox(), LightboxState::Viewing(0));
        let closed = shown.reduce(ModalAction::Close);
        assert_eq!(*closed, ModalState::default());
    }

    #[test]
    fn selection_is_ignored_while_detail_view_is_open() {
        let first = project(&["a.png", "b.png"]);
        let second = Rc::new(sample_project("second", &[]));

        let mut state = ModalState::default();
        assert!(!state.background_inert());
        assert!(state.select(first.clone()));
        assert!(state.background_inert());

        assert!(!state.select(second.clone()));
        assert!(Rc::ptr_eq(state.active_project().unwrap(), &first));

        state.open_screenshot(1);
        assert!(!state.apply(ModalAction::Select(second.clone())));
        assert_eq!(state.selected_screenshot(), Some(1));

        state.close();
        assert!(!state.background_inert());
        assert!(state.select(second.clone()));
        assert!(Rc::ptr_eq(state.active_project().unwrap(), &second));
    }

    #[test]
    fn keys_are_active_only_while_viewing() {
        let mut state = ModalState::default();
        assert!(!state.keys_active());
        state.open(project(&["a.png", "b.png"]));
        assert!(!state.keys_active());

        state.open_screenshot(0);
        assert!(state.keys_active());
        state.close_screenshot();
        assert!(!state.keys_active());

        state.open_screenshot(1);
        state.close();
        assert!(!state.keys_active());

        let mut switched = viewing(&["a.png"], 0);
        switched.open(Rc::new(sample_project("other", &["z.png"])));
        assert!(!switched.keys_active());
    }

    #[test]
    fn counter_is_one_based() {
        assert_eq!(counter_label(0, 3), "1 / 3");
        assert_eq!(counter_label(2, 3), "3 / 3");
    }
}
