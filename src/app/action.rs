/// Intents produced by input handling and by interactive view nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddLoop,
    ToggleTracer,
    ExportState,
    Quit,
}
