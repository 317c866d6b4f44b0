//! Process-wide test case registry
//!
//! Cases are submitted at link time through [`inventory`] and enumerated with
//! [`registered_cases`]. The linker gives no ordering guarantee, so callers
//! must treat registration order as unspecified; enumeration sorts by source
//! location to keep reports stable between runs.

use crate::assertion::TestContext;

/// Body of a test case
pub type TestBody = fn(&mut TestContext);

/// A named, statically registered test case
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    /// Human-readable name, used in reports
    pub name: &'static str,
    /// Raw tag string in bracket form, e.g. `"[factorial][fast]"`
    pub tags: &'static str,
    /// Source file of the registration
    pub file: &'static str,
    /// Source line of the registration
    pub line: u32,
    /// Function invoked to run the case
    pub body: TestBody,
}

inventory::collect!(TestCase);

impl TestCase {
    /// Create a test case. Usable in `const` and `inventory::submit!` contexts.
    pub const fn new(
        name: &'static str,
        tags: &'static str,
        file: &'static str,
        line: u32,
        body: TestBody,
    ) -> Self {
        Self {
            name,
            tags,
            file,
            line,
            body,
        }
    }

    /// Individual tags without their brackets
    ///
    /// `"[factorial][fast]"` yields `factorial` and `fast`. Empty brackets
    /// are dropped.
    pub fn tag_list(&self) -> Vec<&'static str> {
        self.tags
            .split(|c| c == '[' || c == ']')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Check whether the case carries `tag` (brackets optional)
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim_start_matches('[').trim_end_matches(']');
        self.tag_list().iter().any(|t| *t == tag)
    }

    /// `file:line` of the registration
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

/// All registered test cases, sorted by file, line, then name
pub fn registered_cases() -> Vec<&'static TestCase> {
    let mut cases: Vec<&'static TestCase> = inventory::iter::<TestCase>.into_iter().collect();
    cases.sort_by(|a, b| {
        a.file
            .cmp(b.file)
            .then(a.line.cmp(&b.line))
            .then(a.name.cmp(b.name))
    });
    cases
}

/// Define a test body and register it as a test case.
///
/// ```
/// use test_harness::{check, test_case};
///
/// test_case!("Strings are not empty", "[strings]", fn strings_not_empty(ctx) {
///     check!(ctx, !"abc".is_empty());
/// });
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! test_case {
    ($name:expr, fn $body:ident($ctx:ident) $block:block) => {
        $crate::test_case!($name, "", fn $body($ctx) $block);
    };
    ($name:expr, $tags:expr, fn $body:ident($ctx:ident) $block:block) => {
        fn $body($ctx: &mut $crate::TestContext) $block

        $crate::inventory::submit! {
            $crate::TestCase::new($name, $tags, file!(), line!(), $body)
        }
    };
}
