use crate::interactive::domain::models::ProviderRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    Request(ProviderRequest),
    Batch(Vec<Command>),
    ScheduleClearMessage(u64), // delay in milliseconds
}

impl Command {
    /// Provider requests carried by this command, in dispatch order.
    #[cfg(test)]
    pub fn requests(&self) -> Vec<&ProviderRequest> {
        match self {
            Command::Request(request) => vec![request],
            Command::Batch(commands) => commands.iter().flat_map(Command::requests).collect(),
            Command::None | Command::ScheduleClearMessage(_) => Vec::new(),
        }
    }
}
