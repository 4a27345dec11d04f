/// Picker input, decoupled from the terminal key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Select,
    Cancel,
    NavigateUp,
    NavigateDown,
    InputChar(char),
    InputBackspace,
    ClearQuery,
}
