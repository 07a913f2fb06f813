use std::collections::HashMap;

use crate::{Error, Matches, Opt};

use regex::Regex;

/// A single match event handed to a handler during [`Options::parse`].
#[derive(Debug)]
pub struct Match<'a> {
    /// The identity that matched. The invalid path hands out the reserved
    /// identity from [`Opt::invalid`].
    pub opt: &'a Opt,
    /// The argument observed with the switch, if any. Invalid matches carry
    /// the offending bare name here instead.
    pub argument: Option<&'a str>,
    /// False when the token matched a prefix but no registered option.
    pub valid: bool,
}

type Handler = Box<dyn FnMut(Match<'_>)>;

struct Prefix {
    pattern: Box<str>,
    // compiled with the pattern anchored to the token start
    regex: Regex,
}

/// The switch registry: prefix patterns, one handler per [`Opt`] identity,
/// and an optional catch-all.
pub struct Options {
    prefixes: Vec<Prefix>,
    handlers: HashMap<Opt, Handler>,
    fallback: Option<Handler>,
    ignore_case: bool,
}

impl Default for Options {
    fn default() -> Self {
        let mut this = Self::empty();
        for pattern in &["-{1}", "/{1}"] {
            this.prefix(pattern).expect("default prefix patterns compile");
        }
        this
    }
}

impl Options {
    /// A registry without the default `-` and `/` prefixes, for callers that
    /// bring their own patterns.
    pub fn empty() -> Self {
        Self {
            prefixes: Vec::new(),
            handlers: HashMap::new(),
            fallback: None,
            ignore_case: false,
        }
    }

    /// Lowercase incoming tokens before matching. This affects matching, not
    /// storage: registered names are kept verbatim and both sides are folded
    /// at lookup time.
    pub fn ignore_case(&mut self, ignore_case: bool) -> &mut Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Accept another switch prefix, e.g. `-{1,2}`. The pattern is anchored
    /// to the start of the token. First added, first tried. Duplicates are
    /// ignored.
    pub fn prefix(&mut self, pattern: &str) -> Result<&mut Self, Error> {
        if self.prefixes.iter().any(|prefix| &*prefix.pattern == pattern) {
            return Ok(self);
        }

        let regex = Regex::new(&format!("^{}", pattern)).map_err(|error| Error::BadPrefix {
            pattern: pattern.to_string(),
            error,
        })?;

        self.prefixes.push(Prefix {
            pattern: pattern.into(),
            regex,
        });
        Ok(self)
    }

    /// Register a handler for the identity `(name, requires_argument)`.
    /// Re-registering the same identity replaces the handler. The flag does
    /// not gate matching, it is part of the key: lookup reconstructs the
    /// identity from observed argument presence, so a name registered with
    /// the wrong flag is silently never found.
    pub fn on<F>(&mut self, name: &str, requires_argument: bool, handler: F) -> &mut Self
    where
        F: FnMut(Match<'_>) + 'static,
    {
        self.handlers
            .insert(Opt::new(name, requires_argument), Box::new(handler));
        self
    }

    /// Handler for tokens that matched a prefix but no registered option.
    pub fn on_invalid<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(Match<'_>) + 'static,
    {
        self.handlers.insert(Opt::invalid(), Box::new(handler));
        self
    }

    /// Catch-all consulted when a match event has no dedicated handler.
    pub fn fallback<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(Match<'_>) + 'static,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    pub fn has_handler(&self, opt: &Opt) -> bool {
        if self.ignore_case {
            let name = opt.name().to_lowercase();
            self.handlers.keys().any(|key| {
                key.requires_argument() == opt.requires_argument()
                    && key.name().to_lowercase() == name
            })
        } else {
            self.handlers.contains_key(opt)
        }
    }

    pub fn parse<I, S>(&mut self, args: I) -> Matches
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut matches = Matches::default();

        let mut i = 0;
        while i < args.len() {
            let token = self.normalize(args[i].as_ref());
            i += 1;

            let at = match self.match_prefix(&token) {
                Some(at) => at,
                None => {
                    log::debug!("no prefix pattern matches '{}'", token);
                    matches.reject(token);
                    continue;
                }
            };

            let (flag, argument) = match token.find('=') {
                // "<prefix>opt=argument", an empty tail still counts as present
                Some(eq) => (&token[..eq], Some(token[eq + 1..].to_string())),

                // "<prefix>opt argument" or a bare "<prefix>opt": the next
                // token is the argument unless it is a switch itself
                None => match args.get(i).map(|next| next.as_ref()) {
                    Some(next) if self.match_prefix(next).is_none() => {
                        i += 1;
                        (token.as_str(), Some(next.to_string()))
                    }
                    _ => (token.as_str(), None),
                },
            };

            let name = self.prefixes[at].regex.replace(flag, "").into_owned();
            let opt = Opt::new(name, argument.is_some());
            self.dispatch(opt, argument.as_deref(), &mut matches);
        }

        matches
    }

    fn dispatch(&mut self, opt: Opt, argument: Option<&str>, matches: &mut Matches) {
        if self.has_handler(&opt) {
            if let Some(handler) = self.lookup(&opt) {
                handler(Match {
                    opt: &opt,
                    argument,
                    valid: true,
                });
            }
            matches.record(opt, argument);
            return;
        }

        log::debug!("no handler registered for '{}'", opt.name());

        let invalid = Opt::invalid();
        if let Some(handler) = self.handlers.get_mut(&invalid) {
            handler(Match {
                opt: &invalid,
                argument: Some(opt.name()),
                valid: false,
            });
        } else if let Some(fallback) = self.fallback.as_mut() {
            fallback(Match {
                opt: &invalid,
                argument: Some(opt.name()),
                valid: false,
            });
        }
        matches.reject(opt.name());
    }

    fn lookup(&mut self, opt: &Opt) -> Option<&mut Handler> {
        if self.ignore_case {
            let name = opt.name().to_lowercase();
            self.handlers
                .iter_mut()
                .find(|(key, ..)| {
                    key.requires_argument() == opt.requires_argument()
                        && key.name().to_lowercase() == name
                })
                .map(|(.., handler)| handler)
        } else {
            self.handlers.get_mut(opt)
        }
    }

    fn match_prefix(&self, token: &str) -> Option<usize> {
        self.prefixes
            .iter()
            .position(|prefix| prefix.regex.is_match(token))
    }

    fn normalize(&self, token: &str) -> String {
        if self.ignore_case {
            token.to_lowercase()
        } else {
            token.to_string()
        }
    }
}
