#[derive(Debug, Clone, PartialEq)]
pub enum OutputBlock {
    /// A line inside the framed status panel (room, inventory, ground item).
    Status(String),
    /// The movement line printed under the panel.
    Exits(String),
    /// The transient update message, always last.
    Event(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Status(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // ensure only one Exits block exists
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    /// All rendered lines in order, for tests and simple frontends.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .map(|b| match b {
                OutputBlock::Status(s) | OutputBlock::Exits(s) | OutputBlock::Event(s) => {
                    s.as_str()
                }
            })
            .collect()
    }
}
