use crate::quick_access::PickAction;

/// Side effects requested by the reducer and carried out by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadPicks { generation: u64, input: String },
    CancelPicks,
    RunPick {
        prefix: &'static str,
        action: PickAction,
    },
}
