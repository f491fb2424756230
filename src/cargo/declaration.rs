//! Single-line dependency declarations in `Cargo.toml` files.
//!
//! A declaration is recognised only in its git form, pinned to one fixed
//! repository convention (`<host>/<owner>/<project>`):
//!
//! ```toml
//! move-cli = { git = "https://github.com/diem/move", rev="abc123", default-features = false }
//! ```
//!
//! Matching is strict and anchored at both ends of the line. Anything that does
//! not match exactly is reported as `None` and left alone by every caller, so a
//! manifest line that only resembles a declaration is never damaged.
//!
//! ## Lossless reconstruction
//!
//! [`Declaration::render`] rebuilds the line from its parts. Indentation,
//! package name, trailing fields and the line terminator are kept verbatim;
//! only the source part (`git = ..., rev=...` or `path = ...`) is re-emitted.
//! Rendering an unmodified match reproduces the input byte for byte.

use crate::error::Result;
use regex::Regex;

/// Revision pin of a git declaration.
///
/// The variant decides the key written back (`rev` or `branch`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pin {
    Rev(String),
    Branch(String),
}

impl Pin {
    /// Key used in the manifest.
    pub fn key(&self) -> &'static str {
        match self {
            Pin::Rev(_) => "rev",
            Pin::Branch(_) => "branch",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Pin::Rev(v) | Pin::Branch(v) => v,
        }
    }
}

/// Where a declaration points to. Always exactly one of the two forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// `git = "<host>/<owner>/<project>", rev="..."` (or `branch="..."`).
    Remote { owner: String, pin: Pin },
    /// `path = "..."`, relative to the manifest's directory.
    Local { path: String },
}

/// Git URL convention shared by matching and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    host: String,
    project: String,
}

impl RemoteSource {
    pub const DEFAULT_HOST: &'static str = "https://github.com";
    pub const DEFAULT_PROJECT: &'static str = "move";

    /// Creates a convention for `<host>/<owner>/<project>` URLs.
    ///
    /// Trailing slashes on `host` are ignored.
    pub fn new(host: impl Into<String>, project: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
            project: project.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Repository URL for `owner`.
    pub fn url(&self, owner: &str) -> String {
        format!("{}/{}/{}", self.host, owner, self.project)
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST, Self::DEFAULT_PROJECT)
    }
}

/// One dependency declaration line, split into its structural parts.
///
/// Borrowed parts point into the matched line and are never altered by a
/// rewrite; only `source` is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub indent: &'a str,
    /// Everything before ` = `, including any extra spaces ahead of it.
    pub name: &'a str,
    pub source: Source,
    /// Verbatim `, key = value...` fragment before the closing brace.
    pub extra: Option<&'a str>,
    /// Whitespace after the closing brace, line terminator included.
    pub trailing: &'a str,
}

impl Declaration<'_> {
    /// Rebuilds the manifest line.
    pub fn render(&self, remote: &RemoteSource) -> String {
        let extra = self.extra.unwrap_or("");
        match &self.source {
            Source::Remote { owner, pin } => format!(
                "{}{} = {{ git = \"{}\", {}=\"{}\"{} }}{}",
                self.indent,
                self.name,
                remote.url(owner),
                pin.key(),
                pin.value(),
                extra,
                self.trailing
            ),
            Source::Local { path } => format!(
                "{}{} = {{ path = \"{}\"{} }}{}",
                self.indent, self.name, path, extra, self.trailing
            ),
        }
    }
}

/// Compiled recogniser for git-form declarations.
#[derive(Debug, Clone)]
pub struct DeclarationMatcher {
    pattern: Regex,
    remote: RemoteSource,
}

impl DeclarationMatcher {
    /// Compiles the pattern for the given URL convention.
    pub fn new(remote: RemoteSource) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r#"^(?P<indent>\s*)(?P<name>[^=]+) = \{{ git = "{host}/(?P<owner>[^/"]+)/{project}", (?P<key>rev|branch)="(?P<value>[^"]+)"(?P<extra>,.*)? \}}(?P<trailing>\s*)$"#,
            host = regex::escape(remote.host()),
            project = regex::escape(remote.project()),
        ))?;

        Ok(Self { pattern, remote })
    }

    pub fn remote(&self) -> &RemoteSource {
        &self.remote
    }

    /// Splits `line` into a [`Declaration`], or returns `None` if it is not a
    /// git-form declaration of the configured repository.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<Declaration<'a>> {
        let caps = self.pattern.captures(line)?;

        let value = caps["value"].to_string();
        let pin = match &caps["key"] {
            "rev" => Pin::Rev(value),
            _ => Pin::Branch(value),
        };

        Some(Declaration {
            indent: caps.name("indent")?.as_str(),
            name: caps.name("name")?.as_str(),
            source: Source::Remote {
                owner: caps["owner"].to_string(),
                pin,
            },
            extra: caps.name("extra").map(|m| m.as_str()),
            trailing: caps.name("trailing")?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> DeclarationMatcher {
        DeclarationMatcher::new(RemoteSource::default()).unwrap()
    }

    #[test]
    fn test_match_rev_declaration() {
        let m = matcher();
        let line = "  foo-pkg = { git = \"https://github.com/diem/move\", rev=\"abc123\" }\n";
        let decl = m.match_line(line).unwrap();

        assert_eq!(decl.indent, "  ");
        assert_eq!(decl.name, "foo-pkg");
        assert_eq!(
            decl.source,
            Source::Remote {
                owner: "diem".to_string(),
                pin: Pin::Rev("abc123".to_string()),
            }
        );
        assert_eq!(decl.extra, None);
        assert_eq!(decl.trailing, "\n");
    }

    #[test]
    fn test_match_branch_with_extra_fields() {
        let m = matcher();
        let line = "move-cli = { git = \"https://github.com/diem/move\", branch=\"main\", default-features = false }";
        let decl = m.match_line(line).unwrap();

        assert_eq!(decl.name, "move-cli");
        assert_eq!(decl.extra, Some(", default-features = false"));
        assert_eq!(decl.trailing, "");
        match decl.source {
            Source::Remote { pin, .. } => assert_eq!(pin, Pin::Branch("main".to_string())),
            Source::Local { .. } => panic!("expected remote source"),
        }
    }

    #[test]
    fn test_extra_fields_keep_nested_braces() {
        let m = matcher();
        let line = "a = { git = \"https://github.com/diem/move\", rev=\"x\", features = [\"y\"], b = { c = 1 } }\n";
        let decl = m.match_line(line).unwrap();
        assert_eq!(decl.extra, Some(", features = [\"y\"], b = { c = 1 }"));
    }

    #[test]
    fn test_local_form_does_not_match() {
        assert!(matcher().match_line("bar = { path = \"../x\" }\n").is_none());
    }

    #[test]
    fn test_missing_pin_does_not_match() {
        let line = "bar = { git = \"https://github.com/diem/move\" }\n";
        assert!(matcher().match_line(line).is_none());
    }

    #[test]
    fn test_other_repository_does_not_match() {
        let m = matcher();
        assert!(
            m.match_line("bar = { git = \"https://github.com/diem/diem\", rev=\"a\" }")
                .is_none()
        );
        assert!(
            m.match_line("bar = { git = \"https://gitlab.com/diem/move\", rev=\"a\" }")
                .is_none()
        );
    }

    #[test]
    fn test_unknown_key_does_not_match() {
        let line = "bar = { git = \"https://github.com/diem/move\", tag=\"v1\" }";
        assert!(matcher().match_line(line).is_none());
    }

    #[test]
    fn test_trailing_comment_does_not_match() {
        let line = "bar = { git = \"https://github.com/diem/move\", rev=\"a\" } # pinned\n";
        assert!(matcher().match_line(line).is_none());
    }

    #[test]
    fn test_non_declaration_lines_do_not_match() {
        let m = matcher();
        for line in ["[dependencies]\n", "\n", "", "# comment\n", "serde = \"1\"\n"] {
            assert!(m.match_line(line).is_none(), "matched {:?}", line);
        }
    }

    #[test]
    fn test_render_unmodified_is_lossless() {
        let m = matcher();
        let lines = [
            "  foo-pkg = { git = \"https://github.com/diem/move\", rev=\"abc123\" }\n",
            "move-cli = { git = \"https://github.com/diem/move\", branch=\"main\", default-features = false }",
            "\tx = { git = \"https://github.com/fork/move\", rev=\"1\", optional = true }  \r\n",
        ];
        for line in lines {
            let decl = m.match_line(line).unwrap();
            assert_eq!(decl.render(m.remote()), line);
        }
    }

    #[test]
    fn test_render_local() {
        let decl = Declaration {
            indent: "",
            name: "move-cli",
            source: Source::Local {
                path: "../move/language/tools/move-cli".to_string(),
            },
            extra: Some(", default-features = false"),
            trailing: "\n",
        };
        assert_eq!(
            decl.render(&RemoteSource::default()),
            "move-cli = { path = \"../move/language/tools/move-cli\", default-features = false }\n"
        );
    }

    #[test]
    fn test_custom_remote_source() {
        let remote = RemoteSource::new("https://git.example.org/", "toolchain");
        let m = DeclarationMatcher::new(remote).unwrap();
        let line = "t = { git = \"https://git.example.org/acme/toolchain\", rev=\"1\" }";
        assert!(m.match_line(line).is_some());
        assert_eq!(m.remote().url("acme"), "https://git.example.org/acme/toolchain");
    }

    #[test]
    fn test_pin_key_and_value() {
        assert_eq!(Pin::Rev("a".into()).key(), "rev");
        assert_eq!(Pin::Branch("b".into()).key(), "branch");
        assert_eq!(Pin::Branch("b".into()).value(), "b");
    }
}
