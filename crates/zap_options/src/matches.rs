use crate::Opt;

/// Every recognized option in match order with its argument, plus every
/// token that was rejected. Built fresh per parse.
#[derive(Debug, Default)]
pub struct Matches {
    matched: Vec<(Opt, Option<Box<str>>)>,
    invalid: Vec<Box<str>>,
}

impl Matches {
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn contains(&self, opt: &Opt) -> bool {
        self.matched.iter().any(|(key, ..)| key == opt)
    }

    /// The argument recorded for this option. None when the option was not
    /// seen or carried no argument; [`Matches::contains`] tells them apart.
    pub fn get(&self, opt: &Opt) -> Option<&str> {
        self.matched
            .iter()
            .find(|(key, ..)| key == opt)
            .and_then(|(.., argument)| argument.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Opt, Option<&str>)> {
        self.matched
            .iter()
            .map(|(key, argument)| (key, argument.as_deref()))
    }

    /// Tokens that matched no prefix pattern, and bare names that matched no
    /// registered option.
    pub fn invalid(&self) -> impl Iterator<Item = &str> {
        self.invalid.iter().map(|token| &**token)
    }

    pub(crate) fn record(&mut self, opt: Opt, argument: Option<&str>) {
        let argument = argument.map(Box::from);
        match self.matched.iter_mut().find(|(key, ..)| *key == opt) {
            // keys stay unique, a repeated match overwrites the argument
            Some((.., slot)) => *slot = argument,
            None => self.matched.push((opt, argument)),
        }
    }

    pub(crate) fn reject(&mut self, token: impl Into<Box<str>>) {
        self.invalid.push(token.into())
    }
}
