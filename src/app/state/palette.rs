use super::input::AppTextArea;
use crate::quick_access::PickItem;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaletteState<'a> {
    pub text_area: AppTextArea<'a>,
    /// Identifies the most recent lookup; older results are dropped.
    pub generation: u64,
    pub prefix: Option<&'static str>,
    pub items: Vec<PickItem>,
    pub selected_index: usize,
    pub loading: bool,
}

impl PaletteState<'_> {
    pub fn query(&self) -> String {
        self.text_area.text()
    }

    pub fn selected(&self) -> Option<&PickItem> {
        self.items.get(self.selected_index)
    }
}
