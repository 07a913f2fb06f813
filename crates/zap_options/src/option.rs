/// A switch identity: the bare flag text plus whether an argument came with
/// it. Both fields take part in equality, so the same name with and without
/// an argument are two independent identities.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Opt {
    name: Box<str>,
    requires_argument: bool,
}

impl Opt {
    const INVALID: &'static str = "INVALID";

    pub fn new(name: impl Into<Box<str>>, requires_argument: bool) -> Self {
        Self {
            name: name.into(),
            requires_argument,
        }
    }

    /// The reserved identity dispatched for tokens that look like a switch
    /// but have no registered handler.
    pub fn invalid() -> Self {
        Self::new(Self::INVALID, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn requires_argument(&self) -> bool {
        self.requires_argument
    }
}

impl std::fmt::Display for Opt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
