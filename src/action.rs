use crate::types::Repository;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    Back,
    ScrollUp,
    ScrollDown,
    Select,
    Tick,

    // Fetch completions, tagged with the load generation they were issued for
    ReposLoaded(Vec<Repository>, u64),
    Error(String, u64),

    // Side-effecting commands executed on the event-loop task
    OpenUrl(String),
    YankUrl,

    None,
}
