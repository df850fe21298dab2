//! Command line parser
//!
//! Turns a raw line into a [`ParsedCommand`]: alias substitution, variable
//! expansion, tokenization and flag extraction, in that order.

use indexmap::IndexMap;

use super::lexer::{expand_variables, tokenize};

/// Value carried by a flag. `--name` without a value and `-x` are switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Switch,
    Value(String),
}

impl FlagValue {
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Switch => None,
            Self::Value(v) => Some(v),
        }
    }
}

/// Flags of one command line, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(IndexMap<String, FlagValue>);

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FlagValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Value of `--name VALUE`, if given with one.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(FlagValue::as_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: String,
    pub args: Vec<String>,
    pub flags: Flags,
    /// Argument tokens in their original order, before flag extraction.
    pub tokens: Vec<String>,
    /// The line exactly as typed, before alias and variable substitution.
    pub raw: String,
}

/// Split argument tokens into positional arguments and flags.
pub fn split_flags(tokens: Vec<String>) -> (Vec<String>, Flags) {
    let mut args = Vec::new();
    let mut flags = Flags::new();
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        if let Some(name) = token.strip_prefix("--") {
            let value = match iter.peek() {
                Some(next) if !next.starts_with("--") => iter.next().map(FlagValue::Value),
                _ => None,
            };
            flags.insert(name, value.unwrap_or(FlagValue::Switch));
        } else if is_short_flag(&token) {
            flags.insert(&token[1..], FlagValue::Switch);
        } else {
            args.push(token);
        }
    }

    (args, flags)
}

fn is_short_flag(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('-'), Some(c), None) if c.is_ascii_alphabetic()
    )
}

/// Parse one line. Returns `None` when the line holds no tokens.
pub fn parse_line(
    input: &str,
    aliases: &IndexMap<String, String>,
    variables: &IndexMap<String, String>,
) -> Option<ParsedCommand> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let line = aliases.get(trimmed).map(String::as_str).unwrap_or(trimmed);
    let expanded = expand_variables(line, variables);

    let mut tokens = tokenize(&expanded).into_iter();
    let command = tokens.next()?;
    let tokens: Vec<String> = tokens.collect();
    let (args, flags) = split_flags(tokens.clone());

    Some(ParsedCommand {
        command,
        args,
        flags,
        tokens,
        raw: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn parse(input: &str) -> ParsedCommand {
        parse_line(input, &IndexMap::new(), &IndexMap::new()).unwrap()
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_line("", &IndexMap::new(), &IndexMap::new()).is_none());
        assert!(parse_line("   \t ", &IndexMap::new(), &IndexMap::new()).is_none());
        assert!(parse_line(r#""""#, &IndexMap::new(), &IndexMap::new()).is_none());
    }

    #[test]
    fn test_parse_quoted_args() {
        let parsed = parse(r#"echo "hello world" foo"#);
        assert_eq!(parsed.command, "echo");
        assert_eq!(parsed.args, vec!["hello world", "foo"]);
        assert!(parsed.flags.is_empty());
        assert_eq!(parsed.raw, r#"echo "hello world" foo"#);
    }

    #[test]
    fn test_parse_long_flags() {
        let parsed = parse("ls --long --path /tmp extra");
        assert_eq!(parsed.args, vec!["extra"]);
        assert_eq!(parsed.flags.len(), 2);
        assert_eq!(parsed.flags.get("long"), Some(&FlagValue::Switch));
        assert_eq!(parsed.flags.value("path"), Some("/tmp"));
        assert_eq!(parsed.tokens, vec!["--long", "--path", "/tmp", "extra"]);
    }

    #[test]
    fn test_parse_long_flag_at_end_and_before_flag() {
        let parsed = parse("cmd --a --b");
        assert_eq!(parsed.flags.get("a"), Some(&FlagValue::Switch));
        assert_eq!(parsed.flags.get("b"), Some(&FlagValue::Switch));
        assert!(parsed.args.is_empty());

        // A single-dash token after a long flag is still taken as its value.
        let parsed = parse("cmd --depth -x");
        assert_eq!(parsed.flags.value("depth"), Some("-x"));
        assert!(!parsed.flags.contains("x"));
    }

    #[test]
    fn test_parse_short_flags() {
        let parsed = parse("rm -r dir");
        assert_eq!(parsed.flags.get("r"), Some(&FlagValue::Switch));
        assert_eq!(parsed.args, vec!["dir"]);

        // Clusters, digits and bare dashes stay positional.
        let parsed = parse("ls -la -5 - x");
        assert_eq!(parsed.args, vec!["-la", "-5", "-", "x"]);
        assert!(parsed.flags.is_empty());
    }

    #[test]
    fn test_alias_matches_direct_parse() {
        let aliases = map(&[("ll", "ls -la")]);
        let via_alias = parse_line("ll", &aliases, &IndexMap::new()).unwrap();
        let direct = parse_line("ls -la", &aliases, &IndexMap::new()).unwrap();
        assert_eq!(via_alias.command, direct.command);
        assert_eq!(via_alias.args, direct.args);
        assert_eq!(via_alias.flags, direct.flags);
        assert_eq!(via_alias.raw, "ll");
    }

    #[test]
    fn test_alias_requires_whole_line_and_one_level() {
        let aliases = map(&[("ll", "ls -la"), ("a", "b"), ("b", "echo nested")]);
        let parsed = parse_line("ll /tmp", &aliases, &IndexMap::new()).unwrap();
        assert_eq!(parsed.command, "ll");

        let parsed = parse_line("a", &aliases, &IndexMap::new()).unwrap();
        assert_eq!(parsed.command, "b");
        assert!(parsed.args.is_empty());

        let parsed = parse_line("  ll  ", &aliases, &IndexMap::new()).unwrap();
        assert_eq!(parsed.command, "ls");
    }

    #[test]
    fn test_variable_expansion() {
        let variables = map(&[("USER", "bob")]);
        let parsed = parse_line("echo $USER", &IndexMap::new(), &variables).unwrap();
        assert_eq!(parsed.args, vec!["bob"]);
        assert_eq!(parsed.raw, "echo $USER");

        let parsed = parse_line("echo $NOPE end", &IndexMap::new(), &variables).unwrap();
        assert_eq!(parsed.args, vec!["end"]);
    }

    #[test]
    fn test_alias_expansion_sees_variables() {
        let aliases = map(&[("me", "echo $USER")]);
        let variables = map(&[("USER", "bob")]);
        let parsed = parse_line("me", &aliases, &variables).unwrap();
        assert_eq!(parsed.command, "echo");
        assert_eq!(parsed.args, vec!["bob"]);
    }
}
